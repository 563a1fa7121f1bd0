//! One-line text rendering of list records.

use studenthub_core::domain::{Event, Post, Product, Tip, User};

pub trait Render {
    fn line(&self) -> String;
}

fn price(value: Option<f64>) -> String {
    value.map(|p| format!("${:.2}", p)).unwrap_or_else(|| "-".to_string())
}

impl Render for Post {
    fn line(&self) -> String {
        format!(
            "#{:<6} {:<40} {:>9}  [{}] by {}",
            self.id,
            self.title,
            price(self.price),
            self.category.as_deref().unwrap_or("-"),
            self.post_user_name.as_deref().unwrap_or("?"),
        )
    }
}

impl Render for Product {
    fn line(&self) -> String {
        format!(
            "#{:<6} {:<40} {:>9}  [{}] by {}",
            self.id,
            self.title,
            price(self.price),
            self.category.as_deref().unwrap_or("-"),
            self.product_user_name.as_deref().unwrap_or("?"),
        )
    }
}

impl Render for Tip {
    fn line(&self) -> String {
        format!(
            "#{:<6} {:<40} {:+4}  [{}] {} replies",
            self.id,
            self.title,
            self.score(),
            self.kind.as_deref().unwrap_or("-"),
            self.replies.len(),
        )
    }
}

impl Render for Event {
    fn line(&self) -> String {
        let when = self
            .starts_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "TBA".to_string());
        format!(
            "#{:<6} {:<40} {}  @ {}",
            self.id,
            self.title,
            when,
            self.location.as_deref().unwrap_or("-"),
        )
    }
}

impl Render for User {
    fn line(&self) -> String {
        format!(
            "#{:<6} {:<20} {:<30} {}{}",
            self.id,
            self.username,
            self.email,
            self.role.as_deref().unwrap_or("user"),
            if self.banned { " (banned)" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studenthub_core::domain::ItemId;

    #[test]
    fn post_line() {
        let post = Post {
            id: ItemId::Int(3),
            title: "Tutor needed".into(),
            price: Some(20.0),
            category: Some("Tutoring".into()),
            post_user_name: Some("ana".into()),
            ..Default::default()
        };
        let line = post.line();
        assert!(line.starts_with("#3 "));
        assert!(line.contains("$20.00"));
        assert!(line.ends_with("[Tutoring] by ana"));
    }
}
