//! Adapts a function of several arguments into one that takes a sequence of
//! arguments.
//!
//! ```
//! use fluent::wrap;
//!
//! let mut add = wrap(|a: i32, b: i32, c: i32| a + b + c);
//! assert_eq!(add.call(vec![1, 2, 3]), Ok(6));
//! ```

use std::{convert::TryInto, marker::PhantomData};

use crate::{
    error::{FluentError, Result},
    one_or_many::OneOrMany,
};

/// Functions that can be called with their arguments taken from a sequence of
/// `T`. `Args` is the tuple of parameter types and only serves to tell the
/// arities apart.
pub trait SpreadFn<T, Args> {
    type Output;

    const ARITY: usize;

    fn call_spread(&mut self, args: Vec<T>) -> Result<Self::Output>;
}

macro_rules! arg_type {
    ($arg:ident, $ty:ty) => {
        $ty
    };
}

macro_rules! impl_spread_fn {
    ($arity:literal; $($arg:ident)*) => {
        impl<F, T, R> SpreadFn<T, ($(arg_type!($arg, T),)*)> for F
        where
            F: FnMut($(arg_type!($arg, T)),*) -> R,
        {
            type Output = R;

            const ARITY: usize = $arity;

            fn call_spread(&mut self, args: Vec<T>) -> Result<R> {
                let found = args.len();
                let [$($arg),*]: [T; $arity] = args
                    .try_into()
                    .map_err(|_| FluentError::arity_mismatch($arity, found))?;
                Ok((self)($($arg),*))
            }
        }
    };
}

impl_spread_fn!(0;);
impl_spread_fn!(1; a);
impl_spread_fn!(2; a b);
impl_spread_fn!(3; a b c);
impl_spread_fn!(4; a b c d);
impl_spread_fn!(5; a b c d e);
impl_spread_fn!(6; a b c d e f);
impl_spread_fn!(7; a b c d e f g);
impl_spread_fn!(8; a b c d e f g h);

/// A function taking its positional arguments from a sequence.
pub struct Unpacked<F, T, Args> {
    function: F,
    _args: PhantomData<fn(T) -> Args>,
}

pub fn wrap<F, T, Args>(function: F) -> Unpacked<F, T, Args>
where
    F: SpreadFn<T, Args>,
{
    Unpacked {
        function,
        _args: PhantomData,
    }
}

/// Like [`wrap`], for callers that may not have a function to wrap.
pub fn try_wrap<F, T, Args>(function: Option<F>) -> Result<Unpacked<F, T, Args>>
where
    F: SpreadFn<T, Args>,
{
    match function {
        Some(function) => Ok(wrap(function)),
        None => {
            log::debug!("try_wrap called without a function");
            Err(FluentError::MissingFunction)
        }
    }
}

impl<F, T, Args> Unpacked<F, T, Args>
where
    F: SpreadFn<T, Args>,
{
    pub fn arity(&self) -> usize {
        F::ARITY
    }

    /// Calls the wrapped function once with the elements of `sequence` as its
    /// arguments. The whole sequence is consumed even when the element count
    /// does not match the arity.
    pub fn call<S>(&mut self, sequence: S) -> Result<F::Output>
    where
        S: IntoIterator<Item = T>,
    {
        let args: Vec<T> = sequence.into_iter().collect();
        self.function.call_spread(args)
    }

    pub fn call_one_or_many<J>(&mut self, argument: OneOrMany<T, J>) -> Result<F::Output>
    where
        J: IntoIterator<Item = T>,
    {
        match argument {
            OneOrMany::One(_) => Err(FluentError::not_iterable(0)),
            OneOrMany::Many(items) => self.call(items),
        }
    }

    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, Args> Unpacked<F, char, Args>
where
    F: SpreadFn<char, Args>,
{
    /// Calls the wrapped function with the characters of `text`.
    pub fn call_str(&mut self, text: &str) -> Result<F::Output> {
        self.call(text.chars())
    }
}
