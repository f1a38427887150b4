use std::env;

fn main() {
    let api_url = env::var("RESUMATCH_API_URL")
        .unwrap_or_else(|_| String::from("http://localhost:5000/api/screen"));

    println!("cargo:rerun-if-env-changed=RESUMATCH_API_URL");
    println!("cargo:rustc-env=RESUMATCH_API_URL={}", api_url);
}
