use num_traits::Float;
use crate::{VerifyError, Malformed};

pub(crate) fn validate_eps<F: Float>(eps: F) -> Result<(), VerifyError>
{
    if eps.is_finite() && eps >= F::zero() {
        Ok(())
    }
    else {
        log::error!("tolerance is negative or non-finite");
        Err(Malformed::InvalidTolerance.into())
    }
}

pub(crate) fn validate_diag_floor<F: Float>(diag_floor: F) -> Result<(), VerifyError>
{
    if diag_floor.is_finite() && diag_floor > F::zero() {
        Ok(())
    }
    else {
        log::error!("diagonal floor is not positive or non-finite");
        Err(Malformed::InvalidTolerance.into())
    }
}
