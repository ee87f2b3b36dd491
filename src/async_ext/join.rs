//! Join points for concurrently dispatched steps.
//!
//! Every join here waits for all branches to settle before looking at the
//! results, so no in-flight operation is abandoned. When several branches
//! failed, the failure of the earliest argument is surfaced and the rest
//! are dropped.

use core::future::Future;

use crate::types::Outcome;

/// Polls both futures concurrently and pairs their values.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::join2;
/// use notify_rail::Outcome;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let joined = join2(
///     async { Outcome::<_, &str>::success("jesse") },
///     async { Outcome::<_, &str>::success("<p>{{email}}</p>") },
/// )
/// .await;
/// assert_eq!(joined, Outcome::Success(("jesse", "<p>{{email}}</p>")));
/// # });
/// ```
pub async fn join2<A, B, T1, T2, E>(a: A, b: B) -> Outcome<(T1, T2), E>
where
    A: Future<Output = Outcome<T1, E>>,
    B: Future<Output = Outcome<T2, E>>,
{
    let (a, b) = tokio::join!(a, b);
    a.zip(b)
}

/// Three-way variant of [`join2`].
pub async fn join3<A, B, C, T1, T2, T3, E>(a: A, b: B, c: C) -> Outcome<(T1, T2, T3), E>
where
    A: Future<Output = Outcome<T1, E>>,
    B: Future<Output = Outcome<T2, E>>,
    C: Future<Output = Outcome<T3, E>>,
{
    let (a, b, c) = tokio::join!(a, b, c);
    a.zip(b).zip(c).map(|((a, b), c)| (a, b, c))
}
