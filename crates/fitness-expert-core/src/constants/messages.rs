// ABOUTME: Localized message catalog for advice lines and dialogue prompts
// ABOUTME: Static lookup tables keyed by goal and level with explicit fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Message catalog
//!
//! The Arabic catalog carries the original bot wording verbatim. Lookups for
//! unrecognized goals yield an empty string while unrecognized levels yield a
//! generic encouragement line.

use crate::models::{ExperienceLevel, FitnessGoal, Locale};

/// Every user-facing string for one locale
#[derive(Debug)]
pub struct MessageCatalog {
    /// Calorie advice: muscle gain
    pub calories_muscle_gain: &'static str,
    /// Calorie advice: fat loss
    pub calories_fat_loss: &'static str,
    /// Calorie advice: strength increase
    pub calories_strength_increase: &'static str,
    /// Calorie advice: general fitness
    pub calories_general_fitness: &'static str,
    /// Renders the protein range line from gram bounds
    pub protein_line: fn(i64, i64) -> String,
    /// Creatine dosage line
    pub supplement_creatine: &'static str,
    /// Whey protein line
    pub supplement_whey: &'static str,
    /// Hydration line
    pub hydration: &'static str,
    /// Consistency advice: beginner
    pub consistency_beginner: &'static str,
    /// Consistency advice: intermediate
    pub consistency_intermediate: &'static str,
    /// Consistency advice: advanced
    pub consistency_advanced: &'static str,
    /// Consistency advice for unrecognized levels
    pub consistency_fallback: &'static str,
    /// Goal question
    pub goal_prompt: &'static str,
    /// Goal button labels in `FitnessGoal::KNOWN` order
    pub goal_labels: [&'static str; 4],
    /// Level question
    pub level_prompt: &'static str,
    /// Level button labels in `ExperienceLevel::KNOWN` order
    pub level_labels: [&'static str; 3],
    /// Weight question
    pub weight_prompt: &'static str,
    /// Re-prompt after unparseable weight
    pub invalid_weight: &'static str,
    /// Re-prompt after a choice outside the offered options
    pub invalid_choice: &'static str,
    /// Supplements question
    pub supplements_prompt: &'static str,
    /// Yes button label
    pub yes_label: &'static str,
    /// No button label
    pub no_label: &'static str,
    /// Header placed above the advice block
    pub result_header: &'static str,
    /// Acknowledgement of `/cancel`
    pub cancelled: &'static str,
}

static ARABIC: MessageCatalog = MessageCatalog {
    calories_muscle_gain: "✅ زد السعرات بنسبة بسيطة لتحقيق نمو عضلي.",
    calories_fat_loss: "✅ قلل السعرات بشكل مدروس لتخفيض الدهون.",
    calories_strength_increase: "✅ تناول سعرات قريبة من احتياجك لزيادة القوة.",
    calories_general_fitness: "✅ وازن السعرات للحفاظ على اللياقة.",
    protein_line: arabic_protein_line,
    supplement_creatine: "💊 الكرياتين ممتاز للقوة والعضل. 3-5 جم يومياً.",
    supplement_whey: "🥤 الواي بروتين: مفيد بعد التمرين.",
    hydration: "💧 اشرب ماء كفاية قبل، أثناء وبعد التمرين.",
    consistency_beginner: "🔑 كمبتدئ: ركز على بناء عادات صحية.",
    consistency_intermediate: "🔑 كمستخدم متوسط: راقب التقدم وطور التمارين.",
    consistency_advanced: "🔑 كمستخدم متقدم: اهتم بالتخطيط طويل الأمد.",
    consistency_fallback: "استمر في التقدم!",
    goal_prompt: "🎯 اختر هدفك الرياضي:",
    goal_labels: ["💪 عضل", "🔥 دهون", "🏋️ قوة", "🤸 لياقة"],
    level_prompt: "📊 اختر مستواك الرياضي:",
    level_labels: ["🔰 مبتدئ", "⚙️ متوسط", "🧠 متقدم"],
    weight_prompt: "⚖️ أدخل وزنك بالكيلوغرام:",
    invalid_weight: "🚫 من فضلك أدخل رقم صحيح للوزن.",
    invalid_choice: "🚫 من فضلك اختر أحد الخيارات.",
    supplements_prompt: "هل ترغب بمعلومات عن المكملات؟",
    yes_label: "✅ نعم",
    no_label: "❌ لا",
    result_header: "📝 نصائحك:",
    cancelled: "تم الإلغاء.",
};

static ENGLISH: MessageCatalog = MessageCatalog {
    calories_muscle_gain: "✅ Increase calories slightly to support muscle growth.",
    calories_fat_loss: "✅ Reduce calories in a measured way to lose fat.",
    calories_strength_increase: "✅ Eat close to your maintenance calories to build strength.",
    calories_general_fitness: "✅ Balance your calories to maintain fitness.",
    protein_line: english_protein_line,
    supplement_creatine: "💊 Creatine is excellent for strength and muscle. 3-5 g daily.",
    supplement_whey: "🥤 Whey protein: useful after training.",
    hydration: "💧 Drink enough water before, during and after training.",
    consistency_beginner: "🔑 As a beginner: focus on building healthy habits.",
    consistency_intermediate: "🔑 As an intermediate: track progress and evolve your workouts.",
    consistency_advanced: "🔑 As an advanced athlete: focus on long-term planning.",
    consistency_fallback: "Keep progressing!",
    goal_prompt: "🎯 Choose your fitness goal:",
    goal_labels: ["💪 Muscle", "🔥 Fat loss", "🏋️ Strength", "🤸 Fitness"],
    level_prompt: "📊 Choose your experience level:",
    level_labels: ["🔰 Beginner", "⚙️ Intermediate", "🧠 Advanced"],
    weight_prompt: "⚖️ Enter your weight in kilograms:",
    invalid_weight: "🚫 Please enter a valid number for your weight.",
    invalid_choice: "🚫 Please pick one of the options.",
    supplements_prompt: "Would you like information about supplements?",
    yes_label: "✅ Yes",
    no_label: "❌ No",
    result_header: "📝 Your advice:",
    cancelled: "Cancelled.",
};

impl MessageCatalog {
    /// Catalog for a locale
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Arabic => &ARABIC,
            Locale::English => &ENGLISH,
        }
    }

    /// Calorie advice for a goal; empty for unrecognized goals
    #[must_use]
    pub const fn calories(&self, goal: &FitnessGoal) -> &'static str {
        match goal {
            FitnessGoal::MuscleGain => self.calories_muscle_gain,
            FitnessGoal::FatLoss => self.calories_fat_loss,
            FitnessGoal::StrengthIncrease => self.calories_strength_increase,
            FitnessGoal::GeneralFitness => self.calories_general_fitness,
            FitnessGoal::Other(_) => "",
        }
    }

    /// Consistency advice for a level; generic encouragement for unrecognized levels
    #[must_use]
    pub const fn consistency(&self, level: &ExperienceLevel) -> &'static str {
        match level {
            ExperienceLevel::Beginner => self.consistency_beginner,
            ExperienceLevel::Intermediate => self.consistency_intermediate,
            ExperienceLevel::Advanced => self.consistency_advanced,
            ExperienceLevel::Other(_) => self.consistency_fallback,
        }
    }

    /// Render the protein range line
    #[must_use]
    pub fn protein(&self, low: i64, high: i64) -> String {
        (self.protein_line)(low, high)
    }
}

fn arabic_protein_line(low: i64, high: i64) -> String {
    format!("🍗 تناول بين {low} و {high} جرام بروتين يومياً.")
}

fn english_protein_line(low: i64, high: i64) -> String {
    format!("🍗 Eat between {low} and {high} grams of protein daily.")
}
