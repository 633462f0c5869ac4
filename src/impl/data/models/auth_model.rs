use crate::domain::repositories::ledger_repository::LoginStatus;

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct LoginRequestModel<'a> {
    pub phone_number: &'a str,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct RegisterRequestModel<'a> {
    pub phone_number: &'a str,
    pub business_name: &'a str,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum LoginStatusModel {
    Found,
    NotFound,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct LoginResponseModel {
    pub status: LoginStatusModel,
}

impl Into<LoginStatus> for LoginStatusModel {
    fn into(self) -> LoginStatus {
        match self {
            LoginStatusModel::Found => LoginStatus::Found,
            LoginStatusModel::NotFound => LoginStatus::NotFound,
        }
    }
}
