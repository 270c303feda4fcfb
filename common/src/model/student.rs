//! Student account records as exchanged with the admin REST backend.

use serde::{Deserialize, Serialize};

/// One student account as returned by `GET /students`.
///
/// The id is server-assigned; `student_code` is the human-readable
/// identifier shown to teachers, distinct from `id`. `created_at` is the
/// RFC 3339 timestamp string the backend stores at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub student_code: String,
    pub mastered_cards: u32,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::StudentAccount;

    #[test]
    fn parses_the_student_list_payload() {
        let payload = r#"[
            {
                "id": 7,
                "name": "Ada Lovelace",
                "email": "ada@example.org",
                "student_code": "BC-0007",
                "mastered_cards": 42,
                "created_at": "2026-01-15T09:30:00Z"
            },
            {
                "id": 8,
                "name": "Alan Turing",
                "email": "alan@example.org",
                "student_code": "BC-0008",
                "mastered_cards": 0,
                "created_at": "2026-02-01T14:00:00Z"
            }
        ]"#;

        let students: Vec<StudentAccount> = serde_json::from_str(payload).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, 7);
        assert_eq!(students[0].student_code, "BC-0007");
        assert_eq!(students[0].mastered_cards, 42);
        assert_eq!(students[1].name, "Alan Turing");
        assert_eq!(students[1].mastered_cards, 0);
    }
}
