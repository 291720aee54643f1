//! Localized display strings.
//!
//! Strings are looked up by dotted key (`general.withdrawalRequest`). A key
//! missing from the active language falls back to English, and a key missing
//! from English is shown as-is so that gaps are visible rather than blank.

use serde::{Deserialize, Serialize};

// ============================================================================
// Language
// ============================================================================

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Language {
    fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Self::En => english(key),
            Self::Es => spanish(key),
        }
    }
}

// ============================================================================
// Localizer
// ============================================================================

/// Maps dotted keys to strings in the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Creates a localizer for `language`.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Returns the display string for `key`.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.language
            .lookup(key)
            .or_else(|| english(key))
            .unwrap_or(key)
            .to_string()
    }

    /// Localized "True"/"False" for a flag.
    #[must_use]
    pub fn bool(&self, value: bool) -> String {
        self.t(if value { "general.true" } else { "general.false" })
    }
}

// ============================================================================
// String Tables
// ============================================================================

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "general.withdrawalRequest" => "Withdrawal Request",
        "general.active" => "Active",
        "general.used" => "Used",
        "general.note" => "Note",
        "general.true" => "True",
        "general.false" => "False",
        "general.back" => "Back",
        "general.quit" => "Quit",
        "general.copy" => "Copy",
        "general.copied" => "Copied to clipboard",
        "general.hidden" => "Hide amount",
        "general.privacy" => "Privacy",
        "general.scroll" => "Scroll",
        "views.PaymentRequest.description" => "Description",
        "views.PayCode.singleUse" => "Single use",
        "views.PayCode.bolt12" => "BOLT 12",
        "views.NodeInfo.ForwardingHistory.timestamp" => "Timestamp",
        "views.withdrawal.id" => "Request ID",
        "views.SendingLightning.AddANote" => "Add a Note",
        "views.SendingLightning.UpdateNote" => "Update Note",
        "views.QR.title" => "QR",
        "views.QR.amount" => "Amount",
        "views.QR.renderFailed" => "Failed to render QR",
        "views.AddNotes.title" => "Add Note",
        "views.AddNotes.save" => "Save",
        "views.AddNotes.cancel" => "Cancel",
        "views.AddNotes.saved" => "Note saved",
        "views.AddNotes.saveFailed" => "Failed to save note",
        _ => return None,
    })
}

fn spanish(key: &str) -> Option<&'static str> {
    Some(match key {
        "general.withdrawalRequest" => "Solicitud de retiro",
        "general.active" => "Activa",
        "general.used" => "Usada",
        "general.note" => "Nota",
        "general.true" => "Verdadero",
        "general.false" => "Falso",
        "general.back" => "Atrás",
        "general.quit" => "Salir",
        "general.copy" => "Copiar",
        "general.copied" => "Copiado al portapapeles",
        "general.scroll" => "Desplazar",
        "views.PaymentRequest.description" => "Descripción",
        "views.PayCode.singleUse" => "Uso único",
        "views.NodeInfo.ForwardingHistory.timestamp" => "Fecha",
        "views.withdrawal.id" => "ID de solicitud",
        "views.SendingLightning.AddANote" => "Añadir una nota",
        "views.SendingLightning.UpdateNote" => "Actualizar nota",
        "views.QR.amount" => "Importe",
        "views.AddNotes.title" => "Añadir nota",
        "views.AddNotes.save" => "Guardar",
        "views.AddNotes.cancel" => "Cancelar",
        "views.AddNotes.saved" => "Nota guardada",
        _ => return None,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::english(Language::En, "Withdrawal Request")]
    #[case::spanish(Language::Es, "Solicitud de retiro")]
    fn test_title(#[case] language: Language, #[case] expected: &str) {
        assert_eq!(
            Localizer::new(language).t("general.withdrawalRequest"),
            expected
        );
    }

    #[test]
    fn test_falls_back_to_english() {
        let es = Localizer::new(Language::Es);
        assert_eq!(es.t("views.PayCode.bolt12"), "BOLT 12");
    }

    #[test]
    fn test_unknown_key_echoed() {
        assert_eq!(Localizer::default().t("views.nope"), "views.nope");
    }

    #[test]
    fn test_bool() {
        let en = Localizer::default();
        assert_eq!(en.bool(true), "True");
        assert_eq!(en.bool(false), "False");
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
