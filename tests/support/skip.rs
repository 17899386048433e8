/// Skip a test if AWS credentials or a test bucket are not configured.
#[macro_export]
macro_rules! skip_without_s3 {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("CONFGEN_TEST_BUCKET").is_err() {
            eprintln!("SKIPPED: CONFGEN_TEST_BUCKET not set (set to a writable S3 bucket)");
            return;
        }
    };
}
