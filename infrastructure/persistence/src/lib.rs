pub mod cart {
    pub mod repository;
}
