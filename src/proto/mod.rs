// Generated proto modules are written here by build.rs

pub mod common {
    include!("kipventory.common.rs");
}

pub mod auth {
    include!("kipventory.auth.rs");
}

pub mod items {
    include!("kipventory.items.rs");
}

pub mod fields {
    include!("kipventory.fields.rs");
}

pub mod assets {
    include!("kipventory.assets.rs");
}

pub mod cart {
    include!("kipventory.cart.rs");
}

pub mod requests {
    include!("kipventory.requests.rs");
}

pub mod loans {
    include!("kipventory.loans.rs");
}

pub mod logs {
    include!("kipventory.logs.rs");
}

pub mod health {
    include!("grpc.health.v1.rs");
}
