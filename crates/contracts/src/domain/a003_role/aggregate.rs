use serde::{Deserialize, Serialize};

/// Роль из справочника `RoleMaster`.
///
/// `role_code` — строка с числовым значением; чем меньше число, тем ниже
/// роль в иерархии.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_name: String,
    pub role_code: String,

    #[serde(default)]
    pub active: bool,
}

impl Role {
    /// Числовое значение кода роли. `None`, если код не распознан.
    pub fn code_value(&self) -> Option<i64> {
        self.role_code.trim().parse().ok()
    }
}

/// Роли, которые текущий пользователь вправе назначать: строго ниже его
/// собственной. Роли с нечитаемым кодом в список не попадают.
pub fn assignable_roles(roles: &[Role], current_user_code: &str) -> Vec<Role> {
    let Ok(own_code) = current_user_code.trim().parse::<i64>() else {
        return Vec::new();
    };
    roles
        .iter()
        .filter(|r| r.code_value().is_some_and(|code| code < own_code))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str, code: &str) -> Role {
        Role {
            role_name: name.to_string(),
            role_code: code.to_string(),
            active: true,
        }
    }

    #[test]
    fn keeps_only_roles_below_current_user() {
        let roles = vec![
            role("STAFF", "10"),
            role("SUPERVISOR", "20"),
            role("MANAGER", "30"),
            role("DIRECTOR", "40"),
        ];
        let filtered = assignable_roles(&roles, "30");
        let codes: Vec<&str> = filtered.iter().map(|r| r.role_code.as_str()).collect();
        assert_eq!(codes, vec!["10", "20"]);
    }

    #[test]
    fn unparseable_codes_are_excluded() {
        let roles = vec![role("STAFF", "10"), role("BROKEN", "??")];
        let filtered = assignable_roles(&roles, "30");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].role_code, "10");
    }

    #[test]
    fn unparseable_current_code_yields_empty_list() {
        let roles = vec![role("STAFF", "10")];
        assert!(assignable_roles(&roles, "admin").is_empty());
    }
}
