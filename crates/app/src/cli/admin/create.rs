use booknest::users::Role;
use booknest_app::{
    auth::{MIN_PASSWORD_LEN, hash_password},
    database::{self, Db},
    domain::users::{
        PgUsersService, UsersService,
        models::{NewUser, UserUuid},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Login email
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long, env = "BOOKNEST_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    if args.name.trim().is_empty() || args.email.trim().is_empty() {
        return Err("name and email cannot be empty".to_string());
    }

    if args.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }

    let password_hash =
        hash_password(&args.password).map_err(|error| format!("failed to hash password: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(Db::new(pool))
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: args.name.trim().to_string(),
            email: args.email.trim().to_string(),
            password_hash,
            role: Role::Admin,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);
    println!("user_role: {}", user.role);

    Ok(())
}
