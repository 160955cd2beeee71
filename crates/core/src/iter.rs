//! Iteration: `IntoIterator` over the contained value, and short-circuiting
//! `FromIterator` used by `collect`.

use crate::option::Option;
use crate::result::Result;

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<T, V> FromIterator<Option<T>> for Option<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let mut absent = false;
        let collected: V = iter
            .into_iter()
            .map_while(|option| match option {
                Option::Some(value) => Some(value),
                Option::None => {
                    absent = true;
                    None
                },
            })
            .collect();

        if absent { Self::None } else { Self::Some(collected) }
    }
}

impl<T, E, V> FromIterator<Result<T, E>> for Result<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let mut first_error = None;
        let collected: V = iter
            .into_iter()
            .map_while(|result| match result {
                Result::Ok(value) => Some(value),
                Result::Err(error) => {
                    first_error = Some(error);
                    None
                },
            })
            .collect();

        match first_error {
            Some(error) => Self::Err(error),
            None => Self::Ok(collected),
        }
    }
}
