// Scenario tests driving the whole console through programs and bus accesses

#[cfg(test)]
mod asm;


#[cfg(test)]
mod bus_tests;

#[cfg(test)]
mod dma_tests;

#[cfg(test)]
mod gpu_tests;
