use crate::types::PlotWindow;

pub fn zoom(window: PlotWindow, factor: f64) -> PlotWindow {
    let delta = window.interval() * factor;
    PlotWindow {
        start: window.start - delta,
        end: window.end + delta,
    }
}

pub fn needs_update(current: PlotWindow, target: PlotWindow) -> bool {
    current.start != target.start || current.end != target.end
}
