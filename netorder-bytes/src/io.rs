//! Byte sinks and sources.
//!
//! A sink accepts one byte per call and a source yields one byte per call.
//! Failures belong to the implementor: the conversions in this crate pass
//! them through untouched and never retry or roll back.
//!
//! Closures plug in through [`FnSink`], [`FnSource`] and their context
//! carrying counterparts [`ContextSink`] and [`ContextSource`], which hand a
//! caller-owned `&mut C` to every invocation.

use std::convert::Infallible;
use std::marker::PhantomData;

use thiserror::Error;

pub trait ByteSink {
    type Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

pub trait ByteSource {
    type Error;

    fn take(&mut self) -> Result<u8, Self::Error>;
}

impl<S: ByteSink + ?Sized> ByteSink for &'_ mut S {
    type Error = S::Error;

    #[inline(always)]
    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).put(byte)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &'_ mut S {
    type Error = S::Error;

    #[inline(always)]
    fn take(&mut self) -> Result<u8, Self::Error> {
        (**self).take()
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    #[inline(always)]
    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

pub struct FnSink<F, E> {
    function: F,
    marker: PhantomData<fn() -> E>,
}

impl<F, E> FnSink<F, E>
where
    F: FnMut(u8) -> Result<(), E>,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            marker: PhantomData,
        }
    }
}

impl<F, E> ByteSink for FnSink<F, E>
where
    F: FnMut(u8) -> Result<(), E>,
{
    type Error = E;

    #[inline(always)]
    fn put(&mut self, byte: u8) -> Result<(), E> {
        (self.function)(byte)
    }
}

pub struct ContextSink<'c, F, C: ?Sized, E> {
    function: F,
    context: &'c mut C,
    marker: PhantomData<fn() -> E>,
}

impl<'c, F, C, E> ContextSink<'c, F, C, E>
where
    F: FnMut(u8, &mut C) -> Result<(), E>,
    C: ?Sized,
{
    pub fn new(function: F, context: &'c mut C) -> Self {
        Self {
            function,
            context,
            marker: PhantomData,
        }
    }

    pub fn context(&self) -> &C {
        &*self.context
    }
}

impl<'c, F, C, E> ByteSink for ContextSink<'c, F, C, E>
where
    F: FnMut(u8, &mut C) -> Result<(), E>,
    C: ?Sized,
{
    type Error = E;

    #[inline(always)]
    fn put(&mut self, byte: u8) -> Result<(), E> {
        (self.function)(byte, &mut *self.context)
    }
}

pub struct FnSource<F, E> {
    function: F,
    marker: PhantomData<fn() -> E>,
}

impl<F, E> FnSource<F, E>
where
    F: FnMut() -> Result<u8, E>,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            marker: PhantomData,
        }
    }
}

impl<F, E> ByteSource for FnSource<F, E>
where
    F: FnMut() -> Result<u8, E>,
{
    type Error = E;

    #[inline(always)]
    fn take(&mut self) -> Result<u8, E> {
        (self.function)()
    }
}

pub struct ContextSource<'c, F, C: ?Sized, E> {
    function: F,
    context: &'c mut C,
    marker: PhantomData<fn() -> E>,
}

impl<'c, F, C, E> ContextSource<'c, F, C, E>
where
    F: FnMut(&mut C) -> Result<u8, E>,
    C: ?Sized,
{
    pub fn new(function: F, context: &'c mut C) -> Self {
        Self {
            function,
            context,
            marker: PhantomData,
        }
    }

    pub fn context(&self) -> &C {
        &*self.context
    }
}

impl<'c, F, C, E> ByteSource for ContextSource<'c, F, C, E>
where
    F: FnMut(&mut C) -> Result<u8, E>,
    C: ?Sized,
{
    type Error = E;

    #[inline(always)]
    fn take(&mut self) -> Result<u8, E> {
        (self.function)(&mut *self.context)
    }
}

#[inline(always)]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("source exhausted after {position} bytes")]
    Exhausted { position: usize },
}

/// Reads bytes front to back from a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = SourceError;

    fn take(&mut self) -> Result<u8, SourceError> {
        let byte = self
            .bytes
            .get(self.position)
            .copied()
            .ok_or(SourceError::Exhausted { position: self.position })?;
        self.position += 1;
        Ok(byte)
    }
}
