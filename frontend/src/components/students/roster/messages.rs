use common::model::student::StudentAccount;

pub enum Msg {
    StudentsLoaded(Vec<StudentAccount>),
    LoadFailed(String),
    RequestDelete { id: i64, name: String },
    CancelDelete,
    ConfirmDelete,
    DeleteSucceeded,
    DeleteFailed(String),
    DismissError,
}
