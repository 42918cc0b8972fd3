use crate::client::{PendingSet, StoreClient};
use crate::error::OperationError;

/// 设置一个学校的值, 不等待结果
pub fn set_new_school(client: &StoreClient, school_name: &str, value: &str) -> PendingSet {
    client.set(school_name, value)
}

/// 读取并打印一个学校的值, 不存在时打印 null
pub async fn display_school_value(
    client: &StoreClient,
    school_name: &str,
) -> Result<Option<String>, OperationError> {
    let value = client.get(school_name).await?;
    match &value {
        Some(value) => println!("{}", value),
        None => println!("null"),
    }
    Ok(value)
}
