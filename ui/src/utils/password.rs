//! Password strength evaluation
//!
//! Five fixed criteria, each worth 20 points: minimum length, uppercase,
//! lowercase, digit, special character. The score drives the strength meter
//! labels, while `is_strong` (all five satisfied) gates registration.

/// Characters counted as "special" for the fifth criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Number of criteria a password is checked against.
pub const CRITERIA_COUNT: u8 = 5;

/// Boolean outcome of each of the five rules.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PasswordCriteria {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordCriteria {
    /// Evaluate all five rules for a candidate password.
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= 8,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn satisfied_count(&self) -> u8 {
        [
            self.min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|c| **c)
        .count() as u8
    }

    pub fn all_satisfied(&self) -> bool {
        self.satisfied_count() == CRITERIA_COUNT
    }

    /// Checklist rendered under the password field, in display order.
    pub fn checklist(&self) -> [(&'static str, bool); 5] {
        [
            ("Minimal 8 karakter", self.min_length),
            ("Minimal 1 huruf besar (A-Z)", self.has_uppercase),
            ("Minimal 1 huruf kecil (a-z)", self.has_lowercase),
            ("Minimal 1 angka (0-9)", self.has_digit),
            ("Minimal 1 karakter khusus (!@#$%^&*)", self.has_special),
        ]
    }
}

/// Strength bands derived from the score.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrengthLabel {
    None,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::None,
            s if s < 40 => StrengthLabel::VeryWeak,
            s if s < 60 => StrengthLabel::Weak,
            s if s < 80 => StrengthLabel::Fair,
            s if s < 100 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "Belum ada password",
            StrengthLabel::VeryWeak => "Sangat Lemah",
            StrengthLabel::Weak => "Lemah",
            StrengthLabel::Fair => "Cukup Baik",
            StrengthLabel::Good => "Baik",
            StrengthLabel::Strong => "Sangat Kuat",
        }
    }

    /// Fill class for the strength bar.
    pub fn bar_class(&self) -> &'static str {
        match self {
            StrengthLabel::None => "bg-gray-200",
            StrengthLabel::VeryWeak => "bg-red-500",
            StrengthLabel::Weak => "bg-orange-500",
            StrengthLabel::Fair => "bg-yellow-500",
            StrengthLabel::Good => "bg-blue-500",
            StrengthLabel::Strong => "bg-green-500",
        }
    }

    /// Text class for the label next to the bar.
    pub fn text_class(&self) -> &'static str {
        match self {
            StrengthLabel::None => "text-gray-600",
            StrengthLabel::VeryWeak => "text-red-600",
            StrengthLabel::Weak => "text-orange-600",
            StrengthLabel::Fair => "text-yellow-600",
            StrengthLabel::Good => "text-blue-600",
            StrengthLabel::Strong => "text-green-600",
        }
    }
}

/// Full evaluation result for a candidate password.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StrengthReport {
    pub criteria: PasswordCriteria,
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthReport {
    /// True iff all five criteria hold. This, not the label, is the
    /// submission gate.
    pub fn is_strong(&self) -> bool {
        self.criteria.all_satisfied()
    }
}

/// Evaluate a candidate password into criteria, score, and label.
pub fn evaluate(password: &str) -> StrengthReport {
    let criteria = PasswordCriteria::evaluate(password);
    let score = if password.is_empty() {
        0
    } else {
        criteria.satisfied_count() * (100 / CRITERIA_COUNT)
    };
    StrengthReport {
        criteria,
        score,
        label: StrengthLabel::from_score(score),
    }
}

/// Convenience wrapper used by the registration gate.
pub fn is_strong(password: &str) -> bool {
    evaluate(password).is_strong()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero_with_no_label() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::None);
        assert!(!report.is_strong());
    }

    #[test]
    fn all_criteria_scores_one_hundred() {
        let report = evaluate("Aa1!aaaa");
        assert_eq!(report.score, 100);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert!(report.is_strong());
    }

    #[test]
    fn missing_exactly_one_criterion_scores_eighty() {
        // Each password satisfies four of the five rules.
        let candidates = [
            "Aa1!aaa",   // too short
            "aa1!aaaa",  // no uppercase
            "AA1!AAAA",  // no lowercase
            "Aa!!aaaa",  // no digit
            "Aa1aaaaa",  // no special
        ];
        for password in candidates {
            let report = evaluate(password);
            assert_eq!(report.score, 80, "password: {password:?}");
            assert_eq!(report.label, StrengthLabel::Good, "password: {password:?}");
            assert!(!report.is_strong(), "password: {password:?}");
        }
    }

    #[test]
    fn label_thresholds_partition_the_score_range() {
        assert_eq!(evaluate("a").label, StrengthLabel::VeryWeak); // 20
        assert_eq!(evaluate("aA").label, StrengthLabel::Weak); // 40
        assert_eq!(evaluate("aA1").label, StrengthLabel::Fair); // 60
        assert_eq!(evaluate("aA1!").label, StrengthLabel::Good); // 80
        assert_eq!(evaluate("aA1!aaaa").label, StrengthLabel::Strong); // 100
    }

    #[test]
    fn every_listed_special_character_counts() {
        for c in SPECIAL_CHARS.chars() {
            let password = format!("{c}");
            assert!(
                PasswordCriteria::evaluate(&password).has_special,
                "expected {c:?} to count as special"
            );
        }
        assert!(!PasswordCriteria::evaluate("abc ").has_special);
    }

    #[test]
    fn non_empty_score_is_never_zero_label() {
        // A password of only spaces satisfies nothing but is not "no password".
        let report = evaluate("        ");
        assert_eq!(report.score, 20); // min_length holds
        assert_eq!(report.label, StrengthLabel::VeryWeak);
    }
}
