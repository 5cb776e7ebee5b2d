use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub avatar: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites the editable fields.
    pub fn apply(&mut self, update: &UserUpdate) {
        self.first_name.clone_from(&update.first_name);
        self.last_name.clone_from(&update.last_name);
        self.email.clone_from(&update.email);
    }
}

/// One page of `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserPage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

const fn first_page() -> u32 {
    1
}

/// Body of `PUT /users/{id}`; also the edit draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based.
    pub page: u32,
    pub total_pages: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_page_decodes_reqres_listing() -> serde_json::Result<()> {
        let page: UserPage = serde_json::from_value(json!({
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [{
                "id": 7,
                "email": "michael.lawson@reqres.in",
                "first_name": "Michael",
                "last_name": "Lawson",
                "avatar": "https://reqres.in/img/faces/7-image.jpg"
            }],
            "support": { "url": "https://reqres.in/#support-heading" }
        }))?;

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].full_name(), "Michael Lawson");
        Ok(())
    }

    #[test]
    fn apply_only_touches_editable_fields() {
        let mut user = User {
            id: 7,
            avatar: "https://reqres.in/img/faces/7-image.jpg".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Lawson".to_string(),
            email: "michael.lawson@reqres.in".to_string(),
        };
        user.apply(&UserUpdate {
            first_name: "Mike".to_string(),
            last_name: "Lawson".to_string(),
            email: "mike@reqres.in".to_string(),
        });

        assert_eq!(user.id, 7);
        assert_eq!(user.avatar, "https://reqres.in/img/faces/7-image.jpg");
        assert_eq!(user.full_name(), "Mike Lawson");
        assert_eq!(user.email, "mike@reqres.in");
    }
}
