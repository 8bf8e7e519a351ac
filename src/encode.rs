pub(crate) mod assemble;
pub(crate) mod gif;
pub(crate) mod webp;
