//! 缓存层
//!
//! 对象缓存的统一抽象，支持 Moka（内存）与 Redis 两种后端，
//! 通过注册表按配置名选择，失败时回退到内存缓存。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在模块加载时（ctor）把构造函数注册进全局注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $wrapper:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$wrapper>::new()
                            .map_err($crate::errors::LeaveSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    }) as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
