use serde::{Deserialize, Serialize};

use crate::model::LessonId;
use crate::model::content::VocabItem;

/// A lesson within a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub content: LessonContent,
    #[serde(default)]
    pub vocabulary: Vec<VocabItem>,
    /// Audio file name, relative to the content audio directory.
    #[serde(default)]
    pub audio: Option<String>,
}

/// Content blocks of a lesson. Every block is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    #[serde(default)]
    pub grammar: Option<GrammarNote>,
    #[serde(default)]
    pub zodiac_list: Vec<ZodiacEntry>,
    #[serde(default)]
    pub cultural_note: Option<String>,
}

/// A target-language sentence (`id`) with its English translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub id: String,
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarNote {
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<GrammarExample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarExample {
    pub id: String,
    pub en: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacEntry {
    pub animal: String,
    pub en: String,
    pub traits: String,
    pub traits_en: String,
}

impl DialogueLine {
    /// Lines by the opening speaker are laid out on the left.
    #[must_use]
    pub fn is_opening_speaker(&self, dialogue: &[DialogueLine]) -> bool {
        dialogue
            .first()
            .is_some_and(|first| first.speaker == self.speaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_lesson_with_all_blocks() {
        let json = r#"{
            "id": "1-2",
            "title": "Di Pasar",
            "titleEn": "At the Market",
            "audio": "1-2.mp3",
            "content": {
                "intro": "Shopping phrases.",
                "sentences": [{"id": "Berapa harganya?", "en": "How much is it?"}],
                "dialogue": [
                    {"speaker": "Ani", "id": "Selamat pagi!", "en": "Good morning!"},
                    {"speaker": "Budi", "id": "Pagi!", "en": "Morning!"}
                ],
                "grammar": {"title": "Questions", "explanation": "Use apa.",
                            "examples": [{"id": "Apa ini?", "en": "What is this?"}]},
                "culturalNote": "Bargaining is common."
            },
            "vocabulary": [{"word": "pasar", "meaning": "market"}]
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.title_en, "At the Market");
        assert_eq!(section.audio.as_deref(), Some("1-2.mp3"));
        assert_eq!(section.content.dialogue.len(), 2);
        assert!(section.content.grammar.is_some());
        assert!(section.content.zodiac_list.is_empty());

        let dialogue = &section.content.dialogue;
        assert!(dialogue[0].is_opening_speaker(dialogue));
        assert!(!dialogue[1].is_opening_speaker(dialogue));
    }
}
