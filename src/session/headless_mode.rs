//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::screen::ScreenView;
use std::error::Error;

/// Runs the application in headless mode
///
/// Prints activity events and every new screen view to the console until
/// Ctrl+C, or until the first load cycle finishes when `once` is set.
pub async fn run_headless_mode(mut session: SessionData, once: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.wallet.current().badge());

    let dashboard = &mut session.dashboard;
    dashboard.mount();
    let mut last_view = print_view(None, dashboard.view());

    loop {
        tokio::select! {
            transition = dashboard.wait_for_transition() => {
                transition?;
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }

        for event in dashboard.drain_events() {
            if event.should_display() {
                println!("{}", event);
            }
        }
        last_view = print_view(Some(&last_view), dashboard.view());

        if once && !matches!(last_view, ScreenView::Loading) {
            break;
        }
    }

    print_session_exit_success();
    Ok(())
}

/// Print a view when it differs from the previous one, and return it.
fn print_view(previous: Option<&ScreenView>, view: ScreenView) -> ScreenView {
    if previous != Some(&view) {
        for line in view.summary_lines() {
            println!("{}", line);
        }
    }
    view
}
