use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use mini_redis::client::{self, Client};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::StoreConfig;
use crate::error::{ConnectionError, OperationError};

/// 由请求者提供并通过链接任务来发送, 再将命令的响应返回给请求者.
type Responder<T> = oneshot::Sender<Result<T, OperationError>>;

#[derive(Debug)]
enum Command {
    Get {
        key: String,
        resp: Responder<Option<String>>,
    },
    Set {
        key: String,
        val: String,
        resp: Responder<Ack>,
    },
}

/// SET 成功后 server 返回的确认
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OK")
    }
}

/// `set` 返回的 future, 可以 await 它拿到结果, 也可以直接丢弃
#[derive(Debug)]
pub struct PendingSet {
    rx: oneshot::Receiver<Result<Ack, OperationError>>,
}

impl Future for PendingSet {
    type Output = Result<Ack, OperationError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(res)) => Poll::Ready(res),
            // 链接任务已经退出, responder 被丢弃了
            Poll::Ready(Err(_)) => Poll::Ready(Err(OperationError::Closed)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// 持有一个到 redis server 的链接.
///
/// 真正的链接在一个单独的任务中, 所有命令按发送的顺序执行,
/// 所以同一个 `StoreClient` 上先 `set` 再 `get` 一定能读到刚写入的值.
#[derive(Debug)]
pub struct StoreClient {
    tx: mpsc::UnboundedSender<Command>,
    manager: JoinHandle<()>,
}

/// 建立一个与 server 的链接, 失败时只记录日志并返回错误, 不会重试
pub async fn connect(config: &StoreConfig) -> Result<StoreClient, ConnectionError> {
    let client = match client::connect(config.addr()).await {
        Ok(client) => client,
        Err(err) => {
            let err = ConnectionError::new(config.addr(), err);
            error!("{}", err);
            return Err(err);
        }
    };
    info!("Redis client connected to the server");

    let (tx, rx) = mpsc::unbounded_channel();
    let manager = tokio::spawn(manage(client, rx));

    Ok(StoreClient { tx, manager })
}

/// 链接任务, 从 channel 中依次取出命令发给 server
async fn manage(mut client: Client, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        use Command::*;
        match command {
            Get { key, resp } => {
                let res = match client.get(&key).await {
                    Ok(Some(value)) => String::from_utf8(value.to_vec())
                        .map(Some)
                        .map_err(|_| OperationError::InvalidUtf8 { key: key.clone() }),
                    Ok(None) => Ok(None),
                    Err(err) => Err(OperationError::store("GET", &key, err)),
                };
                if let Err(err) = &res {
                    error!("{}", err);
                }
                let _ = resp.send(res);
            }
            Set { key, val, resp } => {
                let res = client
                    .set(&key, val.into())
                    .await
                    .map(|_| Ack)
                    .map_err(|err| OperationError::store("SET", &key, err));
                match &res {
                    Ok(_) => debug!(%key, "SET acknowledged"),
                    Err(err) => error!("{}", err),
                }
                // 调用方可能已经丢弃了 PendingSet
                let _ = resp.send(res);
            }
        }
    }
    debug!("store client connection task finished");
}

impl StoreClient {
    /// 写入一个值, 不会挂起调用方.
    ///
    /// 失败会被记录到日志中; 需要结果时 await 返回的 `PendingSet`.
    pub fn set(&self, key: impl Into<String>, val: impl Into<String>) -> PendingSet {
        let (resp_tx, resp_rx) = oneshot::channel();
        let cmd = Command::Set {
            key: key.into(),
            val: val.into(),
            resp: resp_tx,
        };
        // 发送失败时 cmd 连同 responder 一起被丢弃, PendingSet 会得到 Closed
        if self.tx.send(cmd).is_err() {
            error!("{}", OperationError::Closed);
        }
        PendingSet { rx: resp_rx }
    }

    /// 读取一个值, key 不存在时返回 `None`
    pub async fn get(&self, key: &str) -> Result<Option<String>, OperationError> {
        let (resp_tx, resp_rx) = oneshot::channel();
        let cmd = Command::Get {
            key: key.to_string(),
            resp: resp_tx,
        };
        if self.tx.send(cmd).is_err() {
            error!("{}", OperationError::Closed);
            return Err(OperationError::Closed);
        }
        // 等待响应
        match resp_rx.await {
            Ok(res) => res,
            Err(_) => Err(OperationError::Closed),
        }
    }

    /// 不再接收新的命令, 等已经发送的命令执行完后关闭链接
    pub async fn quit(self) {
        let StoreClient { tx, manager } = self;
        drop(tx);
        if let Err(err) = manager.await {
            error!("store client connection task failed: {}", err);
        }
    }
}

/// 等待一个 SET 的结果并打印出来
pub async fn print_reply(pending: PendingSet) {
    match pending.await {
        Ok(ack) => println!("Reply: {}", ack),
        Err(err) => println!("Error: {}", err),
    }
}
