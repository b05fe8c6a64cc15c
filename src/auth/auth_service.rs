use crate::{
    auth::{auth_dto::{AuthResponse, LoginRequest, RegisterRequest}, jwt::create_jwt},
    error::{AppError, Result},
    user::user_repository::UserRepository,
};

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl AuthService {
    pub fn new(users: UserRepository, jwt_secret: String, jwt_expiration_hours: i64) -> Self {
        Self {
            users,
            jwt_secret,
            jwt_expiration_hours,
        }
    }

    pub async fn register(&self, payload: RegisterRequest) -> Result<AuthResponse> {
        if self.users.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::Validation("Email already in use".to_string()));
        }
        if self.users.find_by_username(&payload.username).await?.is_some() {
            return Err(AppError::Validation("Username already taken".to_string()));
        }

        let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

        let user = self
            .users
            .create(&payload.username, &payload.fullname, &payload.email, &password_hash)
            .await?;

        let token = create_jwt(user.id, &user.email, &self.jwt_secret, self.jwt_expiration_hours)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, payload: LoginRequest) -> Result<AuthResponse> {
        let user = self
            .users
            .find_by_email(&payload.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !bcrypt::verify(&payload.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = create_jwt(user.id, &user.email, &self.jwt_secret, self.jwt_expiration_hours)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}
