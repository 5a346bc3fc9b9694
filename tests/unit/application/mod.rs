mod test_config;
mod test_rate_limiter;
