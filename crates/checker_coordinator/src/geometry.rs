use crate::{Bounds, WindowPlan};

/// Plans a half-width window on whichever side of the work area the
/// requesting window is not occupying, so the two windows tile side by
/// side. The new window is unfocused; the operator's window keeps focus.
pub fn plan_side_window(sender: &Bounds, work_area: &Bounds) -> WindowPlan {
    let width = (f64::from(work_area.width) / 2.0).round() as i32;
    let midpoint = work_area.left + work_area.width / 2;
    let left = if sender.left < midpoint {
        work_area.left + work_area.width - width
    } else {
        work_area.left
    };

    WindowPlan {
        left,
        top: work_area.top,
        width,
        height: work_area.height,
        focused: false,
    }
}
