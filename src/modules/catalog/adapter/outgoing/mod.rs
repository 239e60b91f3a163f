pub mod catalog_query_postgres;
pub mod catalog_repository_postgres;
pub mod sea_orm_entity;
