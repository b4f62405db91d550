use crate::data::models::ScheduleEntry;

/// Index pairs `(i, j)`, `i < j`, of same-day entries whose `[start, end)`
/// ranges intersect. Touching blocks do not count.
pub fn find_overlaps(entries: &[ScheduleEntry]) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        for (j, b) in entries.iter().enumerate().skip(i + 1) {
            if a.day_of_week == b.day_of_week
                && a.start_time < b.end_time
                && b.start_time < a.end_time
            {
                overlaps.push((i, j));
            }
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_same_day_overlap() {
        let entries = vec![
            ScheduleEntry::new("Physics", 1, "09:00", "11:00", "#3b82f6"),
            ScheduleEntry::new("Maths", 1, "10:30", "12:00", "#10b981"),
            ScheduleEntry::new("Chemistry", 2, "10:30", "12:00", "#f59e0b"),
        ];
        assert_eq!(find_overlaps(&entries), vec![(0, 1)]);
    }

    #[test]
    fn test_adjacent_blocks_do_not_overlap() {
        let entries = vec![
            ScheduleEntry::new("Physics", 3, "09:00", "11:00", "#3b82f6"),
            ScheduleEntry::new("Maths", 3, "11:00", "12:00", "#10b981"),
        ];
        assert!(find_overlaps(&entries).is_empty());
    }
}
