use crate::utils::error::ToolError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 把成功的 body 解成 `T` 再輸出成縮排 JSON。
///
/// 解不開的 body（非 JSON 或結構不符）原樣回傳。
pub fn render<T>(body: &str) -> Result<String, ToolError>
where
    T: DeserializeOwned + Serialize,
{
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(serde_json::to_string_pretty(&value)?),
        Err(e) => {
            tracing::debug!(
                "Response is not a {}, returning raw body: {}",
                std::any::type_name::<T>(),
                e
            );
            Ok(body.to_string())
        }
    }
}
