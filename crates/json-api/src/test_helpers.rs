//! Test helpers.

use std::sync::Arc;

use booknest::users::Role;
use booknest_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        books::{
            MockBooksService,
            models::{Book, BookDetails, BookUuid},
        },
        carts::MockCartsService,
        orders::MockOrdersService,
        stats::MockStatsService,
        users::{
            MockUsersService,
            models::{User, UserUuid},
        },
        wishlists::MockWishlistsService,
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::max());

/// One mock per service. Unconfigured mocks fail any call made on them.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) books: MockBooksService,
    pub(crate) users: MockUsersService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) wishlists: MockWishlistsService,
    pub(crate) stats: MockStatsService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            books: Arc::new(self.books),
            users: Arc::new(self.users),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            wishlists: Arc::new(self.wishlists),
            stats: Arc::new(self.stats),
            auth: Arc::new(self.auth),
        })
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        user: TEST_USER_UUID,
        role: Role::User,
    });
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        user: TEST_ADMIN_UUID,
        role: Role::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

/// Serve `route` without a signed-in caller.
pub(crate) fn public_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// Serve `route` as [`TEST_USER_UUID`].
pub(crate) fn user_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_user)
            .push(route),
    )
}

/// Serve `route` as the admin [`TEST_ADMIN_UUID`].
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn make_user(role: Role) -> User {
    User {
        uuid: UserUuid::new(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_details(title: &str, price: u64) -> BookDetails {
    BookDetails {
        title: title.to_string(),
        author: "F. Scott Fitzgerald".to_string(),
        genre: "Fiction".to_string(),
        description: "A novel of the Jazz Age.".to_string(),
        isbn: None,
        price,
        rating: 4.5,
        reviews: 120,
        in_stock: true,
        featured: false,
    }
}

pub(crate) fn make_book(uuid: BookUuid, price: u64) -> Book {
    Book {
        uuid,
        details: make_details("The Great Gatsby", price),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
