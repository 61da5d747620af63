mod review_repo;

pub use review_repo::ReviewRepository;
