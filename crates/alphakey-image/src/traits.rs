/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// An image operation
///
/// Operations implement [`execute_impl`](OperationsTrait::execute_impl),
/// callers use [`execute`](OperationsTrait::execute) which adds timing
/// in trace logs.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation on `image`, replacing its contents
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Run the operation
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let start = std::time::Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
