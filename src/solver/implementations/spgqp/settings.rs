#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::core::{check_setting, SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Rule for updating the objective value after each accepted step.

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FxUpdate {
    /// `f += β(g'd + ½β d'Ad)`.  No extra work, but rounding errors
    /// accumulate over long runs.
    #[default]
    Recurrence,
    /// `f = ½(g - b)'x` from the updated gradient.  One extra dot product.
    Gradient,
}

/// Settings for the spectral projected gradient QP solver.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpgSettings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "1000")]
    pub max_iter: u32,

    ///tolerance on the squared projected step `d'd`
    #[builder(default = "(1e-4).as_T()")]
    pub eps: T,

    ///length of the function value history used in the
    ///non-monotone line search
    #[builder(default = "10")]
    pub m: usize,

    ///line search safeguarding parameter, in (0,1)
    #[builder(default = "(0.9).as_T()")]
    pub gamma: T,

    ///smallest step length
    #[builder(default = "T::zero()")]
    pub sigma1: T,

    ///largest step length.  At most one, so that every step
    ///stays inside the feasible set.
    #[builder(default = "T::one()")]
    pub sigma2: T,

    ///initial Barzilai-Borwein step
    #[builder(default = "T::one()")]
    pub alpha_init: T,

    ///lower safeguard on the Barzilai-Borwein step
    #[builder(default = "(1e-10).as_T()")]
    pub alpha_min: T,

    ///upper safeguard on the Barzilai-Borwein step
    #[builder(default = "(1e10).as_T()")]
    pub alpha_max: T,

    ///also stop when `|f - f_old| < eps`
    #[builder(default = "false")]
    pub stop_difff: bool,

    ///also stop when `d'd < eps*‖b‖`
    #[builder(default = "false")]
    pub stop_normd_normb: bool,

    ///also stop when `d'Ad < eps`
    #[builder(default = "false")]
    pub stop_dAd: bool,

    ///also stop when `d'Ad < eps*‖b‖`
    #[builder(default = "false")]
    pub stop_dAd_normb: bool,

    ///objective value update rule
    #[builder(default = "FxUpdate::Recurrence")]
    pub fx_update: FxUpdate,

    ///recompute the objective from scratch every this many
    ///iterations (0 = never).  Costs one operator apply.
    #[builder(default = "0")]
    pub fx_verify_interval: u32,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for SpgSettings<T>
where
    T: FloatT,
{
    fn default() -> SpgSettings<T> {
        SpgSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> SpgSettings<T>
where
    T: FloatT,
{
    /// Checks that all numerical values are in range.
    ///
    /// `sigma2` must lie in `[sigma1, 1]`.  Each step is `x + βd` with
    /// `d = P(x - αg) - x`, and this point only stays on the simplex
    /// while `β ≤ 1`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_setting!(self.max_iter > 0, "max_iter");
        validate_eps(self.eps)?;
        check_setting!(self.m >= 1, "m");
        validate_gamma(self.gamma)?;
        check_setting!(self.sigma1 >= T::zero(), "sigma1");
        check_setting!(self.sigma2 >= self.sigma1 && self.sigma2 <= T::one(), "sigma2");
        check_setting!(self.alpha_init > T::zero(), "alpha_init");
        check_setting!(self.alpha_min > T::zero(), "alpha_min");
        check_setting!(self.alpha_max >= self.alpha_min, "alpha_max");
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SpgSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SpgSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SpgSettingsBuilder<T>
where
    T: FloatT,
{
    /// check the fields that have been set explicitly.  Fields left
    /// at their defaults are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_iter) = self.max_iter {
            check_setting!(max_iter > 0, "max_iter");
        }
        if let Some(eps) = self.eps {
            validate_eps(eps)?;
        }
        if let Some(m) = self.m {
            check_setting!(m >= 1, "m");
        }
        if let Some(gamma) = self.gamma {
            validate_gamma(gamma)?;
        }
        if let Some(sigma1) = self.sigma1 {
            check_setting!(sigma1 >= T::zero(), "sigma1");
        }
        let sigma1 = self.sigma1.unwrap_or(T::zero());
        let sigma2 = self.sigma2.unwrap_or(T::one());
        check_setting!(sigma2 >= sigma1 && sigma2 <= T::one(), "sigma2");
        if let Some(alpha_init) = self.alpha_init {
            check_setting!(alpha_init > T::zero(), "alpha_init");
        }
        if let Some(alpha_min) = self.alpha_min {
            check_setting!(alpha_min > T::zero(), "alpha_min");
        }
        if let (Some(lo), Some(hi)) = (self.alpha_min, self.alpha_max) {
            check_setting!(hi >= lo, "alpha_max");
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

pub(crate) fn validate_eps<T: FloatT>(eps: T) -> Result<(), SettingsError> {
    check_setting!(eps > T::zero() && eps.is_finite(), "eps");
    Ok(())
}

fn validate_gamma<T: FloatT>(gamma: T) -> Result<(), SettingsError> {
    check_setting!(gamma > T::zero() && gamma < T::one(), "gamma");
    Ok(())
}
