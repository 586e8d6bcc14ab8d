//! Test Helpers

use booknest::users::Role;

use crate::{
    domain::{
        books::{
            BooksService, BooksServiceError,
            models::{BookDetails, BookUuid, NewBook},
        },
        carts::{
            CartsService, CartsServiceError,
            models::{Cart, NewCartItem},
        },
        users::{
            UsersService, UsersServiceError,
            models::{NewUser, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn book_details(title: &str, price: u64) -> BookDetails {
    BookDetails {
        title: title.to_string(),
        author: "Test Author".to_string(),
        genre: "Fiction".to_string(),
        description: String::new(),
        isbn: None,
        price,
        rating: 4.5,
        reviews: 10,
        in_stock: true,
        featured: false,
    }
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    email: &str,
) -> Result<UserUuid, UsersServiceError> {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role: Role::User,
        })
        .await
        .map(|user| user.uuid)
}

pub(crate) async fn create_book(
    ctx: &TestContext,
    title: &str,
    price: u64,
) -> Result<BookUuid, BooksServiceError> {
    ctx.books
        .create_book(NewBook {
            uuid: BookUuid::new(),
            details: book_details(title, price),
        })
        .await
        .map(|book| book.uuid)
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    user: UserUuid,
    book: BookUuid,
    quantity: u32,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .add_item(user, NewCartItem { book, quantity })
        .await
}
