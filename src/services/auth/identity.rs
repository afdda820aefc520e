/*
 * Responsibility
 * - 検証済みトークンから得られる「誰がリクエストしているか」の型
 * - AuthService だけが構築し、handler は読み取り専用で受け取る
 *
 * Notes
 * - request 単位の値。永続化もキャッシュもしない
 */

pub const DEFAULT_ROLE: &str = "user";

/// Authenticated caller, resolved from the `id` / `email` / `role` claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    subject_id: String,
    email: String,
    role: String,
}

impl Identity {
    pub(crate) fn new(subject_id: String, email: String, role: Option<String>) -> Self {
        let role = role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        Self {
            subject_id,
            email,
            role,
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_falls_back_to_user() {
        let identity = Identity::new("u1".into(), "a@x.com".into(), None);
        assert_eq!(identity.role(), "user");

        let blank = Identity::new("u1".into(), "a@x.com".into(), Some("  ".into()));
        assert_eq!(blank.role(), "user");
    }

    #[test]
    fn explicit_role_is_kept() {
        let identity = Identity::new("u1".into(), "a@x.com".into(), Some("admin".into()));
        assert_eq!(identity.subject_id(), "u1");
        assert_eq!(identity.email(), "a@x.com");
        assert_eq!(identity.role(), "admin");
    }
}
