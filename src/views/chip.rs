//! Status badge colors.

/// Badge color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipColor {
    Default,
    Success,
    Danger,
    Warning,
}

impl ChipColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

/// Fixed status-to-color mapping. Lookup is exact and case-sensitive.
pub const STATUS_COLORS: [(&str, ChipColor); 3] = [
    ("selesai", ChipColor::Success),
    ("aktif", ChipColor::Danger),
    ("vacation", ChipColor::Warning),
];

/// Color for a status value; unknown statuses get [`ChipColor::Default`].
pub fn status_color(status: &str) -> ChipColor {
    STATUS_COLORS
        .iter()
        .find(|(known, _)| *known == status)
        .map(|(_, color)| *color)
        .unwrap_or(ChipColor::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_color("selesai"), ChipColor::Success);
        assert_eq!(status_color("aktif"), ChipColor::Danger);
        assert_eq!(status_color("vacation"), ChipColor::Warning);
    }

    #[test]
    fn test_match_is_exact() {
        for status in ["Selesai", "AKTIF", "aktif ", "vacations", "selesai_", "", "ditunda"] {
            assert_eq!(status_color(status), ChipColor::Default, "{status:?}");
        }
    }
}
