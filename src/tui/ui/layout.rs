use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = split_centered(Direction::Vertical, percent_y, r);
    let [_, center, _] = split_centered(Direction::Horizontal, percent_x, middle);
    center
}

fn split_centered(direction: Direction, percent: u16, r: Rect) -> [Rect; 3] {
    let margin = (100 - percent.min(100)) / 2;
    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(margin),
            Constraint::Percentage(percent),
            Constraint::Percentage(margin),
        ])
        .split(r);
    [parts[0], parts[1], parts[2]]
}

/// Split `area` into `n` equal-width columns.
pub(super) fn columns(area: Rect, n: u16) -> Vec<Rect> {
    let width = area.width / n.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Length(width)).collect::<Vec<_>>())
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_never_underflows() {
        let r = inner(Rect::new(0, 0, 1, 1));
        assert_eq!((r.width, r.height), (0, 0));
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let c = centered_rect(50, 50, outer);
        assert_eq!(c.width, 50);
        assert_eq!(c.height, 20);
        assert_eq!(c.x, 25);
    }

    #[test]
    fn columns_split_evenly() {
        let cols = columns(Rect::new(0, 0, 50, 3), 5);
        assert_eq!(cols.len(), 5);
        assert!(cols.iter().all(|c| c.width == 10));
    }
}
