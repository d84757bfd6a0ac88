use crate::Rect;
use crate::profile::SavedWindow;

/// A live window as reported by platform enumeration.
///
/// `handle` is the opaque native handle value; the core crate never
/// interprets it beyond passing it back to the platform.
#[derive(Debug, Clone)]
pub struct WindowInfo {
    pub handle: usize,
    pub title: String,
    pub class: String,
    pub exe: String,
    pub rect: Rect,
}

/// Finds the live window that best matches a saved record.
///
/// Identity on Windows is fuzzy: titles change (document names, page
/// titles), handles never survive a session, and several windows can
/// share a class. Matching therefore scores each candidate on the
/// fields that do line up and picks the best one:
///
/// - same executable: +4
/// - same class: +2
/// - exact title: +3, title substring either way: +1
///
/// A zero score is no match. Ties go to the candidate whose geometry is
/// closest to the saved rect. Windows already claimed by an earlier
/// record (`claimed[i]`) are skipped so one live window never satisfies
/// two records.
pub fn find_match(saved: &SavedWindow, live: &[WindowInfo], claimed: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, u32, i64)> = None;

    for (i, info) in live.iter().enumerate() {
        if claimed.get(i).copied().unwrap_or(false) {
            continue;
        }
        let score = score(saved, info);
        if score == 0 {
            continue;
        }
        let delta = geometry_delta(&saved.rect, &info.rect);
        let better = match best {
            None => true,
            Some((_, s, d)) => score > s || (score == s && delta < d),
        };
        if better {
            best = Some((i, score, delta));
        }
    }

    best.map(|(i, _, _)| i)
}

fn score(saved: &SavedWindow, info: &WindowInfo) -> u32 {
    let mut score = 0;

    if !saved.exe.is_empty() && saved.exe.eq_ignore_ascii_case(&info.exe) {
        score += 4;
    }
    if !saved.class.is_empty() && saved.class.eq_ignore_ascii_case(&info.class) {
        score += 2;
    }
    if !saved.title.is_empty() {
        if saved.title == info.title {
            score += 3;
        } else if contains_ignore_case(&info.title, &saved.title)
            || contains_ignore_case(&saved.title, &info.title)
        {
            score += 1;
        }
    }

    score
}

/// Sum of absolute per-edge distances, used as a tie breaker.
fn geometry_delta(a: &Rect, b: &Rect) -> i64 {
    i64::from((a.x - b.x).abs())
        + i64::from((a.y - b.y).abs())
        + i64::from((a.right() - b.right()).abs())
        + i64::from((a.bottom() - b.bottom()).abs())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
}

/// Capture-time window filters, built from the CLI flags.
///
/// Filters within a field are OR-ed; an empty set matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    /// Title substrings (case-insensitive).
    pub titles: Vec<String>,
    /// Exact class names (case-insensitive).
    pub classes: Vec<String>,
    /// Exact executable stems (case-insensitive).
    pub exes: Vec<String>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.classes.is_empty() && self.exes.is_empty()
    }

    pub fn matches(&self, info: &WindowInfo) -> bool {
        if self.is_empty() {
            return true;
        }
        self.titles
            .iter()
            .any(|t| contains_ignore_case(&info.title, t))
            || self
                .classes
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&info.class))
            || self.exes.iter().any(|e| e.eq_ignore_ascii_case(&info.exe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ChromeMode;

    fn saved(title: &str, class: &str, exe: &str, rect: Rect) -> SavedWindow {
        SavedWindow {
            title: title.into(),
            class: class.into(),
            exe: exe.into(),
            rect,
            chrome: ChromeMode::Keep,
            topmost: false,
            overlay: None,
            style: 0,
            ex_style: 0,
        }
    }

    fn live(handle: usize, title: &str, class: &str, exe: &str, rect: Rect) -> WindowInfo {
        WindowInfo {
            handle,
            title: title.into(),
            class: class.into(),
            exe: exe.into(),
            rect,
        }
    }

    #[test]
    fn exact_identity_beats_title_substring() {
        // Arrange
        let record = saved(
            "PFD",
            "GlassCockpit",
            "prepar3d",
            Rect::new(0, 0, 640, 480),
        );
        let windows = vec![
            live(1, "PFD - backup", "Other", "", Rect::new(0, 0, 640, 480)),
            live(
                2,
                "PFD",
                "GlassCockpit",
                "prepar3d",
                Rect::new(900, 0, 640, 480),
            ),
        ];

        // Act
        let index = find_match(&record, &windows, &[false, false]);

        // Assert
        assert_eq!(index, Some(1));
    }

    #[test]
    fn geometry_breaks_score_ties() {
        // Arrange: two identical panels, distinguishable only by position
        let record = saved(
            "ND",
            "GlassCockpit",
            "prepar3d",
            Rect::new(1920, 0, 640, 480),
        );
        let windows = vec![
            live(
                1,
                "ND",
                "GlassCockpit",
                "prepar3d",
                Rect::new(0, 0, 640, 480),
            ),
            live(
                2,
                "ND",
                "GlassCockpit",
                "prepar3d",
                Rect::new(1910, 2, 640, 480),
            ),
        ];

        // Act / Assert
        assert_eq!(find_match(&record, &windows, &[false, false]), Some(1));
    }

    #[test]
    fn claimed_windows_are_skipped() {
        // Arrange
        let record = saved("ND", "GlassCockpit", "", Rect::new(0, 0, 640, 480));
        let windows = vec![
            live(1, "ND", "GlassCockpit", "", Rect::new(0, 0, 640, 480)),
            live(2, "ND", "GlassCockpit", "", Rect::new(640, 0, 640, 480)),
        ];

        // Act
        let index = find_match(&record, &windows, &[true, false]);

        // Assert
        assert_eq!(index, Some(1));
    }

    #[test]
    fn no_overlap_means_no_match() {
        // Arrange
        let record = saved("Radio Stack", "RadioCls", "sim", Rect::new(0, 0, 300, 200));
        let windows = vec![live(
            1,
            "Task Manager",
            "TaskManagerWindow",
            "taskmgr",
            Rect::new(0, 0, 300, 200),
        )];

        // Act / Assert
        assert_eq!(find_match(&record, &windows, &[false]), None);
    }

    #[test]
    fn title_substring_matches_either_direction() {
        // Arrange: the live title gained a document suffix since capture
        let record = saved("Chart Viewer", "", "", Rect::new(0, 0, 100, 100));
        let windows = vec![live(
            1,
            "Chart Viewer - EDDF.pdf",
            "PdfCls",
            "viewer",
            Rect::new(0, 0, 100, 100),
        )];

        // Act / Assert
        assert_eq!(find_match(&record, &windows, &[false]), Some(0));
    }

    #[test]
    fn empty_filter_set_matches_everything() {
        // Arrange
        let filters = FilterSet::default();
        let info = live(1, "Anything", "AnyClass", "any", Rect::new(0, 0, 1, 1));

        // Act / Assert
        assert!(filters.matches(&info));
    }

    #[test]
    fn filters_within_fields_are_or_ed() {
        // Arrange
        let filters = FilterSet {
            titles: vec!["pfd".into(), "nd".into()],
            classes: Vec::new(),
            exes: vec!["prepar3d".into()],
        };

        // Act / Assert
        assert!(filters.matches(&live(1, "PFD main", "X", "other", Rect::new(0, 0, 1, 1))));
        assert!(filters.matches(&live(2, "weather", "X", "Prepar3D", Rect::new(0, 0, 1, 1))));
        assert!(!filters.matches(&live(3, "weather", "X", "other", Rect::new(0, 0, 1, 1))));
    }
}
