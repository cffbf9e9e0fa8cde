#[cfg(test)]
mod common;
#[cfg(test)]
mod test_edit_ops;
#[cfg(test)]
mod test_utf16;
