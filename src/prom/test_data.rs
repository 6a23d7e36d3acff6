/// A trimmed `/actuator/prometheus` response from the proxy toolkit backend.
pub const ACTUATOR_EXPOSITION: &str = r#"# HELP proxy_toolkit_cache_hits_total Cache hits
# TYPE proxy_toolkit_cache_hits_total counter
proxy_toolkit_cache_hits_total{application="proxy-toolkit",cache="products",} 12.0
proxy_toolkit_cache_hits_total{application="proxy-toolkit",cache="users",} 30.0
# HELP proxy_toolkit_cache_misses_total Cache misses
# TYPE proxy_toolkit_cache_misses_total counter
proxy_toolkit_cache_misses_total{application="proxy-toolkit",cache="products",} 4.0
proxy_toolkit_cache_misses_total{application="proxy-toolkit",cache="users",} 6.0
# HELP proxy_toolkit_idempotency_executed_total Idempotent requests executed
# TYPE proxy_toolkit_idempotency_executed_total counter
proxy_toolkit_idempotency_executed_total{application="proxy-toolkit",} 7.0
# HELP proxy_toolkit_idempotency_served_total Idempotent requests served from store
# TYPE proxy_toolkit_idempotency_served_total counter
proxy_toolkit_idempotency_served_total{application="proxy-toolkit",} 3.0
# HELP proxy_toolkit_ratelimit_rejected_total Requests rejected by the rate limiter
# TYPE proxy_toolkit_ratelimit_rejected_total counter
proxy_toolkit_ratelimit_rejected_total{application="proxy-toolkit",client="demo",} 60.0
# HELP proxy_toolkit_retry_calls_total Retried calls
# TYPE proxy_toolkit_retry_calls_total counter
proxy_toolkit_retry_calls_total{application="proxy-toolkit",outcome="success",} 2.0
proxy_toolkit_retry_calls_total{application="proxy-toolkit",outcome="failure",} 1.0
# HELP proxy_toolkit_retry_attempts_total Retry attempts
# TYPE proxy_toolkit_retry_attempts_total counter
proxy_toolkit_retry_attempts_total{application="proxy-toolkit",} 5.0
# HELP jvm_threads_live_threads The current number of live threads
# TYPE jvm_threads_live_threads gauge
jvm_threads_live_threads{application="proxy-toolkit",} 24.0
# HELP http_server_requests_seconds Duration of HTTP server request handling
# TYPE http_server_requests_seconds summary
http_server_requests_seconds_count{application="proxy-toolkit",method="GET",outcome="SUCCESS",status="200",uri="/demo/cache/{id}",} 42.0
http_server_requests_seconds_sum{application="proxy-toolkit",method="GET",outcome="SUCCESS",status="200",uri="/demo/cache/{id}",} 0.318
process_uptime_seconds{application="proxy-toolkit",} NaN
process_start_time_seconds{application="proxy-toolkit",} 1.71E9
"#;
