use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Сотрудник, ожидающий назначения роли.
///
/// Филиал и отдел — вложенные справочные данные, ими владеет коллаборатор;
/// они могут отсутствовать и в таком случае отображаются заглушкой.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEmployee {
    pub id: i64,
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentRef>,

    /// Текущая роль, если уже была назначена ранее.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    pub created_on: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    pub id: i64,
    pub name: String,
}

/// Учётная запись действующего пользователя, `GET /employee/findById/{userId}`.
/// Нужна экрану назначения ролей только ради кода роли.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAccount {
    pub id: i64,
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса `PUT /employee/{id}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleDto {
    pub role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_role_dto_uses_camel_case() {
        let json = serde_json::to_string(&AssignRoleDto {
            role_name: "MANAGER".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"roleName":"MANAGER"}"#);
    }

    #[test]
    fn missing_relations_deserialize_as_none() {
        let employee: PendingEmployee = serde_json::from_value(serde_json::json!({
            "id": 7,
            "fullName": "Иванов Иван",
            "createdOn": "2024-03-15T14:02:26Z",
        }))
        .unwrap();
        assert!(employee.branch.is_none());
        assert!(employee.department.is_none());
        assert!(employee.role_name.is_none());
    }
}
