pub mod generate_snowflake;
