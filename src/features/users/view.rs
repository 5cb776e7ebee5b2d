//! Plain-text rendering of the user-management view.

use crate::features::users::{
    controller::UserListController,
    types::{PageWindow, User},
};
use std::fmt::Write;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Avatar"];

/// Renders whatever the controller currently shows: the loading text, the
/// error line, or the table.
#[must_use]
pub fn render_page(controller: &UserListController) -> String {
    if controller.is_loading() {
        return "Loading...".to_string();
    }
    if let Some(error) = controller.error() {
        return format!("Error: {error}");
    }
    render_table(controller.users(), controller.window())
}

#[must_use]
pub fn render_table(users: &[User], window: PageWindow) -> String {
    let footer = format!("page {} of {}", window.page, window.total_pages);
    if users.is_empty() {
        return format!("No users found.\n{footer}");
    }

    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.full_name(),
                user.email.clone(),
                user.avatar.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|width| "-".repeat(width)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&footer);
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        // Writing to a String cannot fail.
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{ApiClient, AppError},
        config::AppConfig,
        features::users::types::UserPage,
        notify::RecordingNotifier,
        storage::{MemoryStore, Session},
    };
    use anyhow::Result;
    use std::sync::Arc;

    fn users() -> Vec<User> {
        vec![
            User {
                id: 1,
                avatar: "https://reqres.in/img/faces/1-image.jpg".to_string(),
                first_name: "George".to_string(),
                last_name: "Bluth".to_string(),
                email: "george.bluth@reqres.in".to_string(),
            },
            User {
                id: 12,
                avatar: String::new(),
                first_name: "Rachel".to_string(),
                last_name: "Howell".to_string(),
                email: "rachel.howell@reqres.in".to_string(),
            },
        ]
    }

    fn controller() -> Result<UserListController> {
        Ok(UserListController::new(
            ApiClient::new(&AppConfig::default())?,
            Session::new(Arc::new(MemoryStore::new())),
            Arc::new(RecordingNotifier::new()),
        ))
    }

    #[test]
    fn table_aligns_columns_and_ends_with_footer() {
        let table = render_table(
            &users(),
            PageWindow {
                page: 2,
                total_pages: 2,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "ID  Name           Email                    Avatar"
        );
        assert!(lines[1].starts_with("--  "));
        assert!(lines[2].starts_with("1   George Bluth   george.bluth@reqres.in   https://"));
        assert!(lines[2].ends_with("1-image.jpg"));
        assert_eq!(lines[3], "12  Rachel Howell  rachel.howell@reqres.in");
        assert_eq!(lines[4], "page 2 of 2");
    }

    #[test]
    fn empty_page_says_so() {
        assert_eq!(
            render_table(&[], PageWindow::default()),
            "No users found.\npage 1 of 1"
        );
    }

    #[test]
    fn page_reflects_controller_state() -> Result<()> {
        let mut controller = controller()?;
        assert_eq!(render_page(&controller), "Loading...");

        let ticket = controller.begin_load(1);
        controller.apply_load(ticket, Err(AppError::Network("connection refused".to_string())));
        assert_eq!(
            render_page(&controller),
            "Error: Network error: connection refused"
        );

        let ticket = controller.begin_load(1);
        controller.apply_load(
            ticket,
            Ok(UserPage {
                page: 1,
                per_page: 6,
                total: 2,
                total_pages: 1,
                data: users(),
            }),
        );
        assert!(render_page(&controller).ends_with("page 1 of 1"));
        Ok(())
    }
}
