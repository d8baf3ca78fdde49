use belajar_core::model::{Progress, UnitId};
use services::UnitMapEntry;

const LOCKED_ICON: &str = "🔒";
const DEFAULT_ICON: &str = "📘";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitCardState {
    Open,
    /// Unlocked, but no content file ships for it yet.
    ComingSoon,
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitCardVm {
    pub id: UnitId,
    pub number_label: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub state: UnitCardState,
    /// Shown only for open units with some progress.
    pub progress_percent: Option<u32>,
}

impl From<&UnitMapEntry> for UnitCardVm {
    fn from(entry: &UnitMapEntry) -> Self {
        let state = match (entry.unlocked, entry.has_content) {
            (false, _) => UnitCardState::Locked,
            (true, false) => UnitCardState::ComingSoon,
            (true, true) => UnitCardState::Open,
        };
        let icon = if state == UnitCardState::Locked {
            LOCKED_ICON.to_string()
        } else {
            entry
                .summary
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_ICON.to_string())
        };
        let completed = entry.progress.lessons + entry.progress.exercises;
        let percent = progress_percent(completed, entry.total_items);

        Self {
            id: entry.summary.id,
            number_label: format!("Unit {}", entry.summary.id),
            title: entry.summary.title.clone(),
            subtitle: entry.summary.subtitle.clone(),
            icon,
            state,
            progress_percent: (state == UnitCardState::Open && percent > 0).then_some(percent),
        }
    }
}

#[must_use]
pub fn map_unit_cards(entries: &[UnitMapEntry]) -> Vec<UnitCardVm> {
    entries.iter().map(UnitCardVm::from).collect()
}

/// Rounded share of `completed` in `total`, capped at 100. Zero when `total` is zero.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (completed.min(total) as f64 / total as f64 * 100.0).round();
    percent as u32
}

/// Headline numbers above the unit map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapStatsVm {
    pub xp: u32,
    pub lessons_done: usize,
    pub streak: u32,
}

impl From<&Progress> for MapStatsVm {
    fn from(progress: &Progress) -> Self {
        Self {
            xp: progress.xp(),
            lessons_done: progress.completed_lessons().len(),
            streak: progress.streak(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belajar_core::model::content::UnitSummary;
    use belajar_core::unlock::UnitProgress;

    fn entry(unlocked: bool, has_content: bool, lessons: usize) -> UnitMapEntry {
        UnitMapEntry {
            summary: UnitSummary {
                id: UnitId::new(2),
                title: "Keluarga".to_string(),
                subtitle: "Family".to_string(),
                icon: Some("👪".to_string()),
            },
            unlocked,
            progress: UnitProgress {
                lessons,
                exercises: 0,
            },
            has_content,
            total_items: if has_content { 8 } else { 0 },
        }
    }

    #[test]
    fn locked_unit_hides_icon_and_progress() {
        let card = UnitCardVm::from(&entry(false, true, 2));
        assert_eq!(card.state, UnitCardState::Locked);
        assert_eq!(card.icon, LOCKED_ICON);
        assert_eq!(card.progress_percent, None);
        assert_eq!(card.number_label, "Unit 2");
    }

    #[test]
    fn open_unit_shows_rounded_progress() {
        let card = UnitCardVm::from(&entry(true, true, 3));
        assert_eq!(card.state, UnitCardState::Open);
        assert_eq!(card.icon, "👪");
        assert_eq!(card.progress_percent, Some(38));
    }

    #[test]
    fn untouched_or_empty_units_show_no_progress() {
        assert_eq!(UnitCardVm::from(&entry(true, true, 0)).progress_percent, None);
        let coming = UnitCardVm::from(&entry(true, false, 0));
        assert_eq!(coming.state, UnitCardState::ComingSoon);
        assert_eq!(coming.progress_percent, None);
    }

    #[test]
    fn percent_is_capped_and_safe_for_empty_totals() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(5, 4), 100);
    }
}
