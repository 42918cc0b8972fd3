use thiserror::Error;

/// 无法链接到 redis server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Redis client not connected to the server: {message}")]
pub struct ConnectionError {
    pub addr: String,
    pub message: String,
}

impl ConnectionError {
    pub fn new(addr: &str, err: mini_redis::Error) -> ConnectionError {
        ConnectionError {
            addr: addr.to_string(),
            message: err.to_string(),
        }
    }
}

/// 链接建立之后, 某个 GET / SET 命令执行失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("{command} {key} failed: {message}")]
    Store {
        command: &'static str,
        key: String,
        message: String,
    },

    #[error("value stored under {key} is not valid UTF-8")]
    InvalidUtf8 { key: String },

    #[error("store client is closed")]
    Closed,
}

impl OperationError {
    pub fn store(command: &'static str, key: &str, err: mini_redis::Error) -> OperationError {
        OperationError::Store {
            command,
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_message() {
        let err = ConnectionError::new("127.0.0.1:6379", "connection refused".into());
        assert_eq!(err.addr, "127.0.0.1:6379");
        assert_eq!(
            err.to_string(),
            "Redis client not connected to the server: connection refused"
        );
    }

    #[test]
    fn store_error_names_command_and_key() {
        let err = OperationError::store("SET", "hello", "broken pipe".into());
        assert_eq!(err.to_string(), "SET hello failed: broken pipe");
    }
}
