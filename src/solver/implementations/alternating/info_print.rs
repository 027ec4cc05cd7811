use super::*;
use crate::algebra::*;
use crate::io::expformat;
use std::io::Write;
use std::time::Duration;

impl<T> AlternatingResult<T>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(
        &self,
        out: &mut dyn Write,
        settings: &AlternatingSettings<T>,
        data: &TimeSeriesData<T>,
        nclusters: usize,
        penalty: T,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "   spgqp v{}  -  alternating gamma / theta clustering",
            crate::VERSION
        )?;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "model:")?;
        writeln!(
            out,
            "  data          = {} times x {} regions",
            data.ntimes(),
            data.nregions()
        )?;
        writeln!(out, "  clusters      = {}", nclusters)?;
        writeln!(out, "  penalty       = {}", expformat!("{:.2e}", penalty))?;
        writeln!(out, "  theta in penalty = {}", settings.theta_in_penalty)?;
        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  max iter = {}, eps = {}, annealing = {}{}",
            settings.max_iter,
            expformat!("{:.1e}", settings.eps),
            settings.anneal_iter,
            if settings.anneal_penalty { " (penalty ramp)" } else { "" }
        )?;
        writeln!(out, "  init = {}, seed = {}", settings.gamma_init.name(), settings.seed)?;
        writeln!(out)?;

        Ok(())
    }

    pub(crate) fn print_status_header(
        &self,
        out: &mut dyn Write,
        settings: &AlternatingSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "outer   ")?;
        write!(out, "L            ")?;
        write!(out, "|dL|      ")?;
        write!(out, "inner  ")?;
        write!(out, "theta")?;
        writeln!(out)?;
        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_status(
        &self,
        out: &mut dyn Write,
        settings: &AlternatingSettings<T>,
        inner: u32,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "{:>5}  ", self.iterations)?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.L))?;

        let n = self.L_history.len();
        if n > 1 {
            let change = T::abs(self.L_history[n - 1] - self.L_history[n - 2]);
            write!(out, "{}  ", expformat!("{:6.2e}", change))?;
        } else {
            write!(out, " ------   ")?;
        }
        write!(out, "{:>5}  ", inner)?;

        write!(out, "[")?;
        for (k, θ) in self.theta.iter().enumerate() {
            if k > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", expformat!("{:.4e}", *θ))?;
        }
        writeln!(out, "]")?;

        Ok(())
    }

    pub(crate) fn print_footer(
        &self,
        out: &mut dyn Write,
        settings: &AlternatingSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;
        write!(out, "Terminated with status = {}", self.status)?;
        if let Some(criterion) = self.stop_criterion {
            write!(out, " ({})", criterion)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "outer iterations = {}, inner iterations = {}, operator applications = {}",
            self.iterations, self.inner_iterations, self.hessmult
        )?;
        if self.degenerate_solves > 0 {
            writeln!(
                out,
                "warning: {} inner solves stopped on non-positive curvature",
                self.degenerate_solves
            )?;
        }
        writeln!(
            out,
            "L = {}, aic = {}",
            expformat!("{:+.6e}", self.L),
            expformat!("{:.4e}", self.aic)
        )?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        Ok(())
    }
}
