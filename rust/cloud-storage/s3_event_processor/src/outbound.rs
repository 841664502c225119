pub mod s3_lookup;
