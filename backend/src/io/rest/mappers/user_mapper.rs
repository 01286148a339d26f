use shared::{CreateUserRequest, User, UserListResponse};

use super::format_timestamp;
use crate::domain::commands::user::CreateUserCommand;
use crate::domain::models::user::User as DomainUser;

pub struct UserMapper;

impl UserMapper {
    /// Convert domain User to shared User DTO
    pub fn to_dto(domain: DomainUser) -> User {
        User {
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
            id: domain.id,
            name: domain.name,
            email: domain.email,
        }
    }

    pub fn to_list_response(users: Vec<DomainUser>) -> UserListResponse {
        UserListResponse {
            users: users.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_command(request: CreateUserRequest) -> CreateUserCommand {
        CreateUserCommand {
            name: request.name,
            email: request.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_dto_formats_timestamps() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let dto = UserMapper::to_dto(DomainUser {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            created_at: at,
            updated_at: at,
        });

        assert_eq!(dto.id, "u1");
        assert_eq!(dto.name, "Asha");
        assert_eq!(dto.created_at, "2024-03-01T12:30:00.000Z");
        assert_eq!(dto.updated_at, dto.created_at);
    }
}
