use super::*;
use crate::algebra::*;
use crate::io::expformat;
use crate::solver::core::QPProblem;
use std::io::Write;
use std::time::Duration;

impl<T> SpgInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(
        &self,
        out: &mut dyn Write,
        settings: &SpgSettings<T>,
        problem: &QPProblem<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "        spgqp v{}  -  Spectral Projected Gradient QP",
            crate::VERSION
        )?;
        writeln!(out, "-------------------------------------------------------------")?;

        let set = &problem.feasible_set;
        writeln!(out, "problem:")?;
        writeln!(out, "  variables     = {}", problem.dim())?;
        writeln!(
            out,
            "  simplices     = {} of dimension {}",
            set.nblocks(),
            set.block_size()
        )?;
        writeln!(
            out,
            "  operator      = {}, coeff = {}",
            problem.A.name(),
            expformat!("{:.2e}", problem.A.coeff())
        )?;
        writeln!(out)?;

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  max iter = {}, eps = {}, m = {}",
            settings.max_iter,
            expformat!("{:.1e}", settings.eps),
            settings.m
        )?;
        writeln!(
            out,
            "  gamma = {}, sigma = [{}, {}], alpha_init = {}",
            settings.gamma,
            settings.sigma1,
            settings.sigma2,
            expformat!("{:.1e}", settings.alpha_init)
        )?;
        writeln!(
            out,
            "  fx update = {:?}, verify every {} iterations",
            settings.fx_update, settings.fx_verify_interval
        )?;
        writeln!(out)?;

        Ok(())
    }

    pub(crate) fn print_status_header(
        &self,
        out: &mut dyn Write,
        settings: &SpgSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "iter    ")?;
        write!(out, "fx           ")?;
        write!(out, "fx_max       ")?;
        write!(out, "dd        ")?;
        write!(out, "dAd       ")?;
        write!(out, "alpha     ")?;
        write!(out, "beta      ")?;
        writeln!(out)?;
        writeln!(
            out,
            "-----------------------------------------------------------------------"
        )?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_status(
        &self,
        out: &mut dyn Write,
        settings: &SpgSettings<T>,
        fx_max: T,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "{:>4}  ", self.iterations)?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.fx))?;
        write!(out, "{}  ", expformat!("{:+8.4e}", fx_max))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.dd))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.dAd))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.alpha))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.beta))?;
        writeln!(out)?;

        Ok(())
    }

    pub(crate) fn print_footer(
        &self,
        out: &mut dyn Write,
        settings: &SpgSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(
            out,
            "-----------------------------------------------------------------------"
        )?;

        write!(out, "Terminated with status = {}", self.status)?;
        if let Some(criterion) = self.stop_criterion {
            write!(out, " ({})", criterion)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "iterations = {}, operator applications = {}",
            self.iterations, self.hessmult
        )?;
        writeln!(out, "objective = {}", expformat!("{:+.6e}", self.fx))?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        Ok(())
    }
}
