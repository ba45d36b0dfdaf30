pub mod error;
pub mod tags;

pub mod backup {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod batch {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod pricing {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
