pub mod feed_repo;
