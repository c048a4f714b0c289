use std::sync::Arc;

use rand::Rng;

/// Which canned reply a message falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    Sympathetic,
    Encouraging,
    Dream,
    Plant,
    Generic,
}

struct Rule {
    category: ReplyCategory,
    triggers: &'static [&'static str],
    reply: &'static str,
}

// Checked in order against the lowercased message. "สบาย" is a substring of
// "ไม่สบาย", so the negative rule has to stay ahead of the positive one.
static RULES: [Rule; 4] = [
    Rule {
        category: ReplyCategory::Sympathetic,
        triggers: &["ไม่สบาย", "แย่", "เศร้า", "not feeling well", "bad", "sad"],
        reply: "ได้ยินว่าเมื่อคืนนอนไม่สบายเลย ไม่เป็นไรนะ วันนี้ลองหาเวลาพักผ่อนดูนะ 💙",
    },
    Rule {
        category: ReplyCategory::Encouraging,
        triggers: &["ดี", "สบาย", "ขอบคุณ", "good", "comfortable", "thanks"],
        reply: "ดีใจด้วยนะ! การนอนหลับที่ดีจะช่วยให้ต้นไม้ของคุณเติบโตแข็งแรง 🌱✨",
    },
    Rule {
        category: ReplyCategory::Dream,
        triggers: &["ฝัน", "dream"],
        reply: "ความฝันสะท้อนจิตใจของเรานะ บันทึกไว้เพื่อดูรูปแบบการนอนหลับกันเถอะ 🌙",
    },
    Rule {
        category: ReplyCategory::Plant,
        triggers: &["ต้นไม้", "สวน", "plant", "garden"],
        reply: "ต้นไม้ของคุณกำลังเติบโตไปพร้อมกับการนอนหลับที่ดีขึ้นนะ ให้รดน้ำทุกเช้าเพื่อให้แข็งแรง 🌿",
    },
];

/// Fallback pool for messages no rule matches.
pub const GENERIC_REPLIES: [&str; 4] = [
    "เข้าใจแล้วนะ ขอบคุณที่บอกฉัน 😊",
    "ฉันอยู่ที่นี่เพื่อช่วยดูแลการนอนหลับของคุณเสมอ 💚",
    "การนอนหลับที่ดีเป็นพื้นฐานของสุขภาพที่ดี ดูแลตัวเองด้วยนะ 🌸",
    "มีอะไรอยากปรึกษาเกี่ยวกับการนอนหลับไหม? ฉันพร้อมช่วยเสมอ 🤗",
];

/// Source of randomness for the fallback reply.
pub trait ReplyPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ReplyPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// The scripted sleep assistant.
#[derive(Clone)]
pub struct Responder {
    picker: Arc<dyn ReplyPicker>,
}

impl Responder {
    pub fn new(picker: impl ReplyPicker + 'static) -> Self {
        Self {
            picker: Arc::new(picker),
        }
    }

    pub fn classify(message: &str) -> ReplyCategory {
        matching_rule(&message.to_lowercase())
            .map(|rule| rule.category)
            .unwrap_or(ReplyCategory::Generic)
    }

    pub fn respond(&self, message: &str) -> String {
        match matching_rule(&message.to_lowercase()) {
            Some(rule) => rule.reply.to_string(),
            None => {
                let idx = self.picker.pick(GENERIC_REPLIES.len()) % GENERIC_REPLIES.len();
                GENERIC_REPLIES[idx].to_string()
            }
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ThreadRngPicker)
    }
}

fn matching_rule(lowered: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lowered.contains(t)))
}
