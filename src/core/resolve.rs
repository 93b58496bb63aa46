use crate::domain::model::{Platform, ResolvedEndpoint};

/// Default endpoints handed out when an entry carries no explicit override.
/// Operator policy, not protocol; kept as constants until someone needs to
/// externalize them.
pub const JAVA_DEFAULT_HOST: &str = "java.example.com";
pub const JAVA_DEFAULT_PORT: u16 = 25565;
pub const BEDROCK_DEFAULT_HOST: &str = "bedrock.example.com";
pub const BEDROCK_DEFAULT_PORT: u16 = 19132;

/// Explicit config values win; otherwise the platform picks the default pair.
/// Total over all inputs: the result always has both host and port.
pub fn resolve(
    explicit_ip: Option<&str>,
    explicit_port: Option<u16>,
    platform: Platform,
) -> ResolvedEndpoint {
    let host = match explicit_ip {
        Some(ip) => ip.to_string(),
        None if platform.is_bedrock() => BEDROCK_DEFAULT_HOST.to_string(),
        None => JAVA_DEFAULT_HOST.to_string(),
    };

    let port = explicit_port.unwrap_or(if platform.is_bedrock() {
        BEDROCK_DEFAULT_PORT
    } else {
        JAVA_DEFAULT_PORT
    });

    ResolvedEndpoint { host, port }
}
