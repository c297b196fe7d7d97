pub mod db;
pub mod feeding;

#[cfg(test)]
mod tests;
