use crate::algebra::*;
use crate::solver::core::{check_setting, SettingsError};
use crate::solver::implementations::spgqp::{validate_eps, SpgSettings};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Initial cluster assignment for the alternating solver.

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GammaInit<T> {
    /// uniform random values projected onto the simplices, drawn from
    /// a generator seeded with `seed`
    #[default]
    Random,
    /// every block at the barycentre `1/K`
    Uniform,
    /// user supplied assignment, projected before use
    Given(Vec<T>),
}

impl<T> GammaInit<T> {
    pub fn name(&self) -> &'static str {
        match self {
            GammaInit::Random => "random",
            GammaInit::Uniform => "uniform",
            GammaInit::Given(_) => "given",
        }
    }
}

/// Settings for the alternating (gamma, theta) solver.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlternatingSettings<T: FloatT> {
    ///maximum number of outer iterations
    #[builder(default = "100")]
    pub max_iter: u32,

    ///tolerance on the change in objective between outer iterations
    #[builder(default = "(1e-6).as_T()")]
    pub eps: T,

    ///number of leading outer iterations that are always run
    #[builder(default = "0")]
    pub anneal_iter: u32,

    ///ramp the operator coefficient up linearly during the
    ///`anneal_iter` leading iterations
    #[builder(default = "false")]
    pub anneal_penalty: bool,

    ///scale the operator blocks of cluster `k` by `theta[k]`
    #[builder(default = "false")]
    pub theta_in_penalty: bool,

    ///initial assignment
    #[builder(default = "GammaInit::Random")]
    pub gamma_init: GammaInit<T>,

    ///initial cluster parameters (zero if not given)
    #[builder(default = "None", setter(strip_option))]
    pub theta_init: Option<Vec<T>>,

    ///seed for random initialization
    #[builder(default = "0")]
    pub seed: u64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///settings for the inner QP solver
    #[builder(default = "SpgSettings::default()")]
    pub spg: SpgSettings<T>,
}

impl<T> Default for AlternatingSettings<T>
where
    T: FloatT,
{
    fn default() -> AlternatingSettings<T> {
        AlternatingSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> AlternatingSettings<T>
where
    T: FloatT,
{
    /// Checks that all numerical values are in range, including the
    /// inner solver settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_setting!(self.max_iter > 0, "max_iter");
        validate_eps(self.eps)?;
        check_setting!(self.anneal_iter <= self.max_iter, "anneal_iter");
        self.spg.validate()
    }
}

impl From<SettingsError> for AlternatingSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        AlternatingSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> AlternatingSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        let max_iter = self.max_iter.unwrap_or(100);
        check_setting!(max_iter > 0, "max_iter");
        if let Some(eps) = self.eps {
            validate_eps(eps)?;
        }
        if let Some(anneal_iter) = self.anneal_iter {
            check_setting!(anneal_iter <= max_iter, "anneal_iter");
        }
        if let Some(ref spg) = self.spg {
            spg.validate()?;
        }
        Ok(())
    }
}
