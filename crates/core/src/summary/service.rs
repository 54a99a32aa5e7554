//! Profit/loss synthesis over the extractor outputs.
//!
//! `compute` is a pure function of (project, snapshot, config); recomputing
//! with unchanged inputs yields bit-identical output. Caching and
//! invalidation are the host's responsibility.

use projfin_shared::config::AnalyticsConfig;
use projfin_shared::types::CostCenterId;
use rust_decimal::Decimal;

use super::extract;
use super::types::{DataAvailability, FinancialSummary, Project, ProjectSnapshot};

/// Service computing a project's financial summary.
pub struct SummaryService;

impl SummaryService {
    /// Computes the complete financial summary for one project.
    ///
    /// A project without a valid cost center yields the zeroed summary with
    /// `NoAnalyticAccount` status; that is a terminal state, not an error.
    #[must_use]
    pub fn compute(
        project: &Project,
        snapshot: &ProjectSnapshot,
        config: &AnalyticsConfig,
    ) -> FinancialSummary {
        let Some(cost_center) = Self::effective_cost_center(project, snapshot) else {
            return FinancialSummary::default();
        };

        let customer = extract::customer_revenue(&snapshot.ledger_lines, cost_center);
        let vendor = extract::vendor_costs(&snapshot.ledger_lines, cost_center);
        let skonto = extract::skonto(&snapshot.analytic_lines, cost_center);
        let labor = extract::labor(&snapshot.analytic_lines, cost_center);
        let other = extract::other_amounts(&snapshot.analytic_lines, cost_center);
        let sales = extract::sales_orders(&snapshot.sales_orders, project);

        let adjusted_vendor_bill_amount = vendor.total_net * config.surcharge_factor;
        let labor_costs_adjusted = labor.adjusted_hours * config.hourly_rate;
        let adjusted_other_costs = other.costs * config.surcharge_factor;
        let total_costs_net = labor.costs + other.costs;

        let revenue = customer.invoiced_net - skonto.customer_taken + other.revenue;
        let costs = vendor.total_net - skonto.vendor_received + total_costs_net;
        let profit_loss_net = revenue - costs;
        let negative_difference_net = profit_loss_net.min(Decimal::ZERO).abs();

        // Forecast view: surcharge on vendor bills and other costs, labor at
        // the configured rate; Skonto deliberately left out.
        let current_calculated_profit_loss = customer.invoiced_net + other.revenue
            - adjusted_vendor_bill_amount
            - labor_costs_adjusted
            - adjusted_other_costs;

        FinancialSummary {
            has_analytic_account: true,
            availability: DataAvailability::Available,

            sale_order_amount_net: sales.amount_net,
            has_sales_orders: sales.has_orders,
            sale_order_tax_names: sales.tax_names,

            customer_invoiced_net: customer.invoiced_net,
            customer_invoiced_gross: customer.invoiced_gross,
            customer_paid_net: customer.paid_net,
            customer_paid_gross: customer.paid_gross,
            customer_outstanding_net: customer.invoiced_net - customer.paid_net,
            customer_outstanding_gross: customer.invoiced_gross - customer.paid_gross,
            customer_invoices_net: customer.invoices_net,
            customer_credit_notes_net: customer.credit_notes_net,

            vendor_total_net: vendor.total_net,
            vendor_total_gross: vendor.total_gross,
            vendor_bills_net: vendor.bills_net,
            vendor_credit_notes_net: vendor.credit_notes_net,
            adjusted_vendor_bill_amount,

            customer_skonto_taken: skonto.customer_taken,
            vendor_skonto_received: skonto.vendor_received,

            total_hours_booked: labor.hours,
            total_hours_booked_adjusted: labor.adjusted_hours,
            labor_costs: labor.costs,
            labor_costs_adjusted,

            other_costs_net: other.costs,
            adjusted_other_costs,
            other_revenue_net: other.revenue,
            total_costs_net,

            profit_loss_net,
            negative_difference_net,
            current_calculated_profit_loss,
        }
    }

    /// Resolves the cost center the aggregation runs over.
    ///
    /// When the snapshot designates a project plan, a cost center outside
    /// that plan is treated as absent. Without a designated plan every
    /// assigned cost center counts.
    #[must_use]
    pub fn effective_cost_center(
        project: &Project,
        snapshot: &ProjectSnapshot,
    ) -> Option<CostCenterId> {
        let cost_center = project.cost_center?;
        match snapshot.project_plan {
            Some(plan_id) if cost_center.plan_id != plan_id => None,
            _ => Some(cost_center.id),
        }
    }
}
